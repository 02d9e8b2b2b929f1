//! Exam results by course.
//!
//! The course picker drives a dependent read. Switching courses quickly
//! issues one request per selection; only the newest selection's response
//! is shown.

use leptos::prelude::*;

use crate::components::fetch_notice::FetchNotice;
use crate::net::endpoints;
use crate::net::types::{Course, ExamResult};
use crate::state::auth::use_auth;
use crate::state::resource::ResourceSync;
use crate::util::format;
use crate::util::resource::use_resource;

#[component]
pub fn ExamResultsPage() -> impl IntoView {
    let auth = use_auth();
    let courses = use_resource::<Vec<Course>, _>(|| Some(endpoints::courses()));
    let selected = RwSignal::new(None::<String>);
    let results =
        use_resource::<Vec<ExamResult>, _>(move || selected.get().map(|id| endpoints::exam_results(Some(&id))));

    let courses_status = Signal::derive(move || courses.state.with(ResourceSync::status));
    let courses_error = Signal::derive(move || courses.error());
    let courses_retry = Callback::new(move |()| courses.reload());

    let results_status = Signal::derive(move || results.state.with(ResourceSync::status));
    let results_error = Signal::derive(move || results.error());
    let results_retry = Callback::new(move |()| results.reload());

    view! {
        <section class="results-page">
            <h1>"Exam results"</h1>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=move || {
                    view! {
                        <p>{move || if auth.get().loading { "Loading..." } else { "Sign in to view exam results." }}</p>
                    }
                }
            >
                <FetchNotice status=courses_status error=courses_error on_retry=courses_retry/>
                <label class="results-page__picker">
                    "Course "
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        selected.set((!value.is_empty()).then_some(value));
                    }>
                        <option value="">"Select a course"</option>
                        <For
                            each=move || courses.data().unwrap_or_default()
                            key=|course: &Course| course.id.clone()
                            children=move |course: Course| {
                                view! { <option value=course.id.clone()>{format!("{} {}", course.code, course.title)}</option> }
                            }
                        />
                    </select>
                </label>
                <FetchNotice
                    status=results_status
                    error=results_error
                    on_retry=results_retry
                    loading_label="Loading results..."
                />
                <Show when=move || results.data().is_some_and(|rows| !rows.is_empty())>
                    <table class="results-table">
                        <thead>
                            <tr>
                                <th>"Student"</th>
                                <th>"Exam"</th>
                                <th>"Marks"</th>
                                <th>"%"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                results
                                    .data()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|row| {
                                        let student = row.student_name.clone().unwrap_or_else(|| row.student_id.clone());
                                        view! {
                                            <tr>
                                                <td>{student}</td>
                                                <td>{row.exam.clone()}</td>
                                                <td>{format!("{} / {}", row.marks, row.max_marks)}</td>
                                                <td>{format::percentage(row.percentage())}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
                <Show when=move || results.data().is_some_and(|rows| rows.is_empty())>
                    <p class="results-page__empty">"No results recorded for this course yet."</p>
                </Show>
            </Show>
        </section>
    }
}
