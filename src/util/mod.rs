//! Utility helpers shared across views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `resource` binds state models to the Leptos reactive runtime and the
//! network; `validation` and `format` are pure and unit tested directly.

pub mod format;
pub mod resource;
pub mod validation;
