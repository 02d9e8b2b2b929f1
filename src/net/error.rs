//! Request error taxonomy shared by every network call site.
//!
//! ERROR HANDLING
//! ==============
//! Two kinds reach the user: validation errors raised before any request is
//! sent, and request errors for non-2xx responses or transport failures. A
//! third kind, malformed responses, covers 2xx bodies that do not decode into
//! the expected type so views never render from a half-read payload.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure surfaced by an API call or a pre-flight validation check.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Client-side validation failed; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// Server rejected the request, or the request never completed.
    ///
    /// `status` is `None` for transport failures (offline, DNS, CORS).
    #[error("{message}")]
    Request { status: Option<u16>, message: String },
    /// Server answered 2xx with a body that failed schema decoding.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Build a request error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        Self::Request { status: Some(status), message: extract_error_message(Some(body), fallback) }
    }

    /// Build a request error for a request that produced no response.
    pub fn transport(fallback: &str) -> Self {
        Self::Request { status: None, message: fallback.to_owned() }
    }

    /// Message to render next to the triggering form. Never blank.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Request { message, .. } => message.clone(),
            Self::MalformedResponse(_) => "The server sent an unexpected response.".to_owned(),
        }
    }

    /// HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pull the conventional `message` field out of an error body.
///
/// Falls back to `fallback` when the body is missing, is not JSON, carries
/// no message, or carries a blank one. An `error` string field is accepted
/// when `message` is absent.
pub fn extract_error_message(body: Option<&str>, fallback: &str) -> String {
    body.and_then(|raw| serde_json::from_str::<ErrorBody>(raw).ok())
        .and_then(|parsed| parsed.message.or(parsed.error))
        .map(|message| message.trim().to_owned())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
