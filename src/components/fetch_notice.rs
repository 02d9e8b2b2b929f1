//! Loading / error banner for a synchronized resource.

use leptos::prelude::*;

use crate::state::resource::FetchStatus;

/// Renders the non-ready phases of a read. Ready and idle render nothing so
/// the owning view can show its own content.
#[component]
pub fn FetchNotice(
    status: Signal<FetchStatus>,
    error: Signal<Option<String>>,
    on_retry: Callback<()>,
    #[prop(optional)] loading_label: Option<&'static str>,
) -> impl IntoView {
    let label = loading_label.unwrap_or("Loading...");
    move || match status.get() {
        FetchStatus::Loading => view! { <p class="fetch-notice fetch-notice--loading">{label}</p> }.into_any(),
        FetchStatus::Error => view! {
            <div class="fetch-notice fetch-notice--error" role="alert">
                <p>{move || error.get().unwrap_or_default()}</p>
                <button class="btn" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
        FetchStatus::Idle | FetchStatus::Ready => ().into_any(),
    }
}
