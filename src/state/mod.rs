//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`resource`, `submission`, `cart`, `auth`) so
//! views depend on small focused models. Shared instances are constructed by
//! the composition root and reached through `context`, which fails fast when
//! a view is mounted outside its provider.

pub mod auth;
pub mod cart;
pub mod context;
pub mod resource;
pub mod submission;
