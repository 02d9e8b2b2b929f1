//! Root application component with routing and context providers.
//!
//! This is the composition root: the API config, the cart, and the auth
//! session are constructed here once and provided to every route. Views
//! reach them through the fail-fast accessors in `state`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::cart_badge::CartBadge;
use crate::net::config::ApiConfig;
use crate::net::endpoints;
use crate::net::types::User;
use crate::pages::{
    cart::CartPage, change_password::ChangePasswordPage, courses::CoursesPage, exam_results::ExamResultsPage,
};
use crate::state::auth::{AuthState, provide_auth};
use crate::state::cart::{CartStore, provide_cart};
use crate::state::resource::{FetchStatus, ResourceSync};
use crate::util::resource::use_resource;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    provide_cart(CartStore::new());
    let auth = RwSignal::new(AuthState::pending());
    provide_auth(auth);

    // Session lookup: a rejected `/api/auth/me` means signed out.
    let session = use_resource::<User, _>(|| Some(endpoints::current_user()));
    Effect::new(move || match session.state.with(ResourceSync::status) {
        FetchStatus::Ready => auth.set(AuthState { user: session.data(), loading: false }),
        FetchStatus::Error => auth.set(AuthState::default()),
        FetchStatus::Idle | FetchStatus::Loading => {}
    });

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("{} ({})", user.name, user.role.label()))
            .unwrap_or_default()
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/institute-portal.css"/>
        <Title text="Institute Portal"/>

        <Router>
            <nav class="top-nav">
                <A href="/">"Courses"</A>
                <A href="/results">"Exam results"</A>
                <A href="/account/password">"Password"</A>
                <span class="top-nav__spacer"></span>
                <span class="top-nav__self">{greeting}</span>
                <CartBadge/>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CoursesPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("results") view=ExamResultsPage/>
                    <Route path=(StaticSegment("account"), StaticSegment("password")) view=ChangePasswordPage/>
                </Routes>
            </main>
        </Router>
    }
}
