//! Inline success / error line under a form.

use leptos::prelude::*;

#[component]
pub fn FormOutcome(message: Signal<Option<String>>, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="form-outcome form-outcome--error" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
        <Show when=move || message.get().is_some()>
            <p class="form-outcome form-outcome--ok">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
