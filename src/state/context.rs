//! Fail-fast access to values provided by the composition root.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::use_context;

/// A context value was requested outside the provider that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("{0} used outside of its provider")]
    Unbound(&'static str),
}

/// Look up a provided value, naming it in the error when unbound.
///
/// # Errors
///
/// Returns [`ContextError::Unbound`] when no ancestor provided `T`.
pub fn require<T: Clone + 'static>(name: &'static str) -> Result<T, ContextError> {
    use_context::<T>().ok_or(ContextError::Unbound(name))
}
