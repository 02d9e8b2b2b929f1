//! Reusable UI building blocks shared by pages.

pub mod cart_badge;
pub mod fetch_notice;
pub mod form_outcome;
