//! Client-side checks run before a form is sent.
//!
//! Each check returns `ApiError::Validation` with the message the form
//! displays, so callers can short-circuit with `?` before any request.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::error::ApiError;
use crate::state::submission::SubmissionState;

pub const MIN_PASSWORD_LEN: usize = 8;

/// First blank field (after trimming) in `fields`, reported by label.
///
/// # Errors
///
/// `Validation("<Label> is required.")` for the first missing field.
pub fn require_fields(form: &SubmissionState, fields: &[(&str, &str)]) -> Result<(), ApiError> {
    match fields.iter().find(|(name, _)| form.get(name).trim().is_empty()) {
        Some((_, label)) => Err(ApiError::Validation(format!("{label} is required."))),
        None => Ok(()),
    }
}

/// # Errors
///
/// `Validation` when the confirmation differs from the new password.
pub fn passwords_match(password: &str, confirm: &str) -> Result<(), ApiError> {
    if password == confirm {
        Ok(())
    } else {
        Err(ApiError::Validation("Passwords do not match.".to_owned()))
    }
}

/// # Errors
///
/// `Validation` when shorter than [`MIN_PASSWORD_LEN`] characters.
pub fn password_strength(password: &str) -> Result<(), ApiError> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ApiError::Validation(format!("Password must be at least {MIN_PASSWORD_LEN} characters.")))
    }
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Loose shape check; the backend owns real verification.
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// # Errors
///
/// `Validation` when `raw` does not look like an email address.
pub fn email(raw: &str) -> Result<String, ApiError> {
    let email = normalize_email(raw);
    if looks_like_email(&email) {
        Ok(email)
    } else {
        Err(ApiError::Validation("Enter a valid email address.".to_owned()))
    }
}
