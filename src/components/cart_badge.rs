//! Header link to the cart with a live item count.

use leptos::prelude::*;

use crate::state::cart::use_cart;

#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = use_cart();

    view! {
        <a href="/cart" class="cart-badge" title="Cart">
            "Cart"
            <Show when=move || (cart.count() > 0)>
                <span class="cart-badge__count">{move || cart.count()}</span>
            </Show>
        </a>
    }
}
