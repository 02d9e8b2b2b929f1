//! Change-password form.
//!
//! Blank fields, mismatched confirmation, and short passwords are caught
//! locally; only a well-formed change reaches the server.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;

use crate::components::form_outcome::FormOutcome;
use crate::net::api::{ApiRequest, Method};
use crate::net::endpoints;
use crate::net::error::ApiError;
use crate::net::types::{ApiMessage, PasswordChange};
use crate::state::submission::SubmissionState;
use crate::util::resource::{json_request, use_form};
use crate::util::validation::{password_strength, passwords_match, require_fields};

pub(crate) const FIELDS: [&str; 3] = ["current", "password", "confirm"];

/// Validate the form and build the change request.
pub(crate) fn prepare_password_change(form: &SubmissionState) -> Result<ApiRequest, ApiError> {
    require_fields(
        form,
        &[("current", "Current password"), ("password", "New password"), ("confirm", "Confirmation")],
    )?;
    passwords_match(form.get("password"), form.get("confirm"))?;
    password_strength(form.get("password"))?;
    let body = PasswordChange {
        current_password: form.get("current").to_owned(),
        new_password: form.get("password").to_owned(),
    };
    json_request(Method::Put, &endpoints::change_password(), &body)
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let form = use_form(&FIELDS);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let prepared = form.state.with_untracked(prepare_password_change);
        form.submit::<ApiMessage, _>(prepared, endpoints::change_password().failure_message, true, |ack| {
            ack.or("Password changed.")
        });
    };

    let message = Signal::derive(move || form.message());
    let error = Signal::derive(move || form.error());

    view! {
        <section class="password-page">
            <h1>"Change password"</h1>
            <form class="password-form" on:submit=on_submit>
                <input
                    type="password"
                    placeholder="Current password"
                    prop:value=move || form.value("current")
                    on:input=move |ev| form.set("current", event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password"
                    prop:value=move || form.value("password")
                    on:input=move |ev| form.set("password", event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm new password"
                    prop:value=move || form.value("confirm")
                    on:input=move |ev| form.set("confirm", event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || form.submitting()>
                    {move || if form.submitting() { "Saving..." } else { "Change password" }}
                </button>
            </form>
            <FormOutcome message=message error=error/>
        </section>
    }
}
