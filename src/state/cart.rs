//! Course cart shared by the catalogue, the cart page, and the header badge.
//!
//! DESIGN
//! ======
//! `Cart` is a plain ordered collection with pure operations; `CartStore`
//! wraps it in a signal so every view observes the same instance. The store
//! is built by the composition root and handed down through context, and
//! reading it from outside that subtree is a programming error that panics
//! immediately rather than yielding an empty cart.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::num::NonZeroU32;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::context::{ContextError, require};
use crate::net::types::Course;

/// Something that can be put in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Price in minor currency units.
    pub unit_price: u64,
}

impl From<&Course> for CartItem {
    fn from(course: &Course) -> Self {
        Self { id: course.id.clone(), name: format!("{} {}", course.code, course.title), unit_price: course.fee }
    }
}

/// One distinct item and how many of it were added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub unit_price: u64,
    quantity: NonZeroU32,
}

impl CartLine {
    fn new(item: CartItem) -> Self {
        Self { id: item.id, name: item.name, unit_price: item.unit_price, quantity: NonZeroU32::MIN }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity.get()))
    }
}

/// Ordered lines, at most one per item id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Bump the matching line, or append a new line with quantity 1.
    pub fn add(&mut self, item: CartItem) {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(item)),
        }
    }

    /// Drop the whole line for `id`. Returns whether one existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total quantity across all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).fold(0, u64::saturating_add)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn ids(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.id.clone()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lines.iter().any(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Shared, reactive handle to the one cart.
#[derive(Clone, Copy, Debug)]
pub struct CartStore {
    cart: RwSignal<Cart>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self { cart: RwSignal::new(Cart::default()) }
    }

    pub fn add(&self, item: CartItem) {
        self.cart.update(|cart| cart.add(item));
    }

    pub fn remove(&self, id: &str) {
        self.cart.update(|cart| {
            cart.remove(id);
        });
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
    }

    /// Reactive total quantity (tracks the cart signal).
    pub fn count(&self) -> u64 {
        self.cart.with(Cart::count)
    }

    pub fn total(&self) -> u64 {
        self.cart.with(Cart::total)
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.with(|cart| cart.lines().to_vec())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cart.with(|cart| cart.contains(id))
    }

    /// Untracked copy for event handlers.
    pub fn snapshot(&self) -> Cart {
        self.cart.get_untracked()
    }
}

/// Make `store` available to every descendant view.
pub fn provide_cart(store: CartStore) {
    provide_context(store);
}

/// # Errors
///
/// Returns [`ContextError::Unbound`] outside a cart provider.
pub fn try_use_cart() -> Result<CartStore, ContextError> {
    require::<CartStore>("CartStore")
}

/// The cart provided by the composition root.
///
/// # Panics
///
/// Panics when called outside a cart provider; there is no default cart.
pub fn use_cart() -> CartStore {
    match try_use_cart() {
        Ok(store) => store,
        Err(e) => panic!("{e}"),
    }
}
