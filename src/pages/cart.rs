//! Cart page: review lines, remove or clear them, and enroll.
//!
//! Checkout sends one enrollment request for every course in the cart and
//! empties the cart only after the server accepts it.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::components::form_outcome::FormOutcome;
use crate::net::api::{ApiRequest, Method};
use crate::net::endpoints;
use crate::net::error::ApiError;
use crate::net::types::{ApiMessage, EnrollmentRequest};
use crate::state::cart::{Cart, CartLine, use_cart};
use crate::util::format;
use crate::util::resource::{json_request, use_form};

/// Enrollment request for the current cart contents.
pub(crate) fn prepare_checkout(cart: &Cart) -> Result<ApiRequest, ApiError> {
    if cart.is_empty() {
        return Err(ApiError::Validation("Your cart is empty.".to_owned()));
    }
    json_request(Method::Post, &endpoints::enrollments(), &EnrollmentRequest { course_ids: cart.ids() })
}

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let checkout = use_form(&[]);

    let on_checkout = move |_| {
        let prepared = prepare_checkout(&cart.snapshot());
        checkout.submit::<ApiMessage, _>(prepared, endpoints::enrollments().failure_message, false, move |ack| {
            cart.clear();
            ack.or("Enrollment complete.")
        });
    };

    let message = Signal::derive(move || checkout.message());
    let error = Signal::derive(move || checkout.error());

    view! {
        <section class="cart-page">
            <h1>"Your cart"</h1>
            <Show
                when=move || (cart.count() > 0)
                fallback=|| view! { <p class="cart-page__empty">"No courses selected."</p> }
            >
                <table class="cart-table">
                    <thead>
                        <tr>
                            <th>"Course"</th>
                            <th>"Qty"</th>
                            <th>"Fee"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || cart.lines()
                            key=|line: &CartLine| (line.id.clone(), line.quantity())
                            children=move |line: CartLine| {
                                let id = line.id.clone();
                                view! {
                                    <tr>
                                        <td>{line.name.clone()}</td>
                                        <td>{line.quantity()}</td>
                                        <td>{format::amount(line.subtotal())}</td>
                                        <td>
                                            <button class="btn btn--link" on:click=move |_| cart.remove(&id)>
                                                "Remove"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <p class="cart-page__total">"Total: " {move || format::amount(cart.total())}</p>
                <div class="cart-page__actions">
                    <button class="btn" on:click=move |_| cart.clear()>
                        "Clear cart"
                    </button>
                    <button class="btn btn--primary" on:click=on_checkout disabled=move || checkout.submitting()>
                        {move || if checkout.submitting() { "Enrolling..." } else { "Enroll" }}
                    </button>
                </div>
            </Show>
            <FormOutcome message=message error=error/>
        </section>
    }
}
