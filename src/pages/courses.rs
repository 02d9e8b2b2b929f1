//! Course catalogue: loads courses on mount and feeds the cart.

use leptos::prelude::*;

use crate::components::cart_badge::CartBadge;
use crate::components::fetch_notice::FetchNotice;
use crate::net::endpoints;
use crate::net::types::Course;
use crate::state::cart::{CartItem, use_cart};
use crate::state::resource::ResourceSync;
use crate::util::format;
use crate::util::resource::use_resource;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let cart = use_cart();
    let courses = use_resource::<Vec<Course>, _>(|| Some(endpoints::courses()));

    let status = Signal::derive(move || courses.state.with(ResourceSync::status));
    let error = Signal::derive(move || courses.error());
    let on_retry = Callback::new(move |()| courses.reload());

    view! {
        <section class="courses-page">
            <header class="page-header">
                <h1>"Courses"</h1>
                <CartBadge/>
            </header>
            <FetchNotice status=status error=error on_retry=on_retry loading_label="Loading courses..."/>
            <ul class="course-list">
                <For
                    each=move || courses.data().unwrap_or_default()
                    key=|course: &Course| course.id.clone()
                    children=move |course: Course| {
                        let item = CartItem::from(&course);
                        let id = course.id.clone();
                        let in_cart = move || cart.contains(&id);
                        view! {
                            <li class="course-list__item">
                                <span class="course-list__code">{course.code.clone()}</span>
                                <span class="course-list__title">{course.title.clone()}</span>
                                <span class="course-list__teacher">
                                    {course.teacher_name.clone().unwrap_or_default()}
                                </span>
                                <span class="course-list__fee">{format::amount(course.fee)}</span>
                                <button class="btn" on:click=move |_| cart.add(item.clone())>
                                    {move || if in_cart() { "Add another" } else { "Add to cart" }}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
