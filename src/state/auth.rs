//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once by the composition root from the current-user endpoint and
//! read by role-aware views. Access rules themselves live on the backend;
//! this state only decides what to render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::context::{ContextError, require};
use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session lookup has answered.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Teachers and admins manage marks, attendance, and invoices.
    pub fn is_staff(&self) -> bool {
        matches!(self.role(), Some(Role::Teacher | Role::Admin))
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Auth has answered and nobody is signed in.
    pub fn should_redirect_unauth(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

pub fn provide_auth(auth: RwSignal<AuthState>) {
    provide_context(auth);
}

/// # Errors
///
/// Returns [`ContextError::Unbound`] outside an auth provider.
pub fn try_use_auth() -> Result<RwSignal<AuthState>, ContextError> {
    require::<RwSignal<AuthState>>("AuthState")
}

/// # Panics
///
/// Panics when called outside an auth provider.
pub fn use_auth() -> RwSignal<AuthState> {
    match try_use_auth() {
        Ok(auth) => auth,
        Err(e) => panic!("{e}"),
    }
}
