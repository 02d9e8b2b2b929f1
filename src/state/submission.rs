//! Form submission state: field values, in-flight flag, and outcome.
//!
//! Validation errors are recorded with `reject` before any request is made;
//! request errors arrive through `fail`. Both land in the same `error` slot
//! so the form renders them identically.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::collections::BTreeMap;

use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    defaults: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
    submitting: bool,
    message: Option<String>,
    error: Option<String>,
}

impl SubmissionState {
    /// Form with the given fields, all empty.
    pub fn new(fields: &[&str]) -> Self {
        Self::with_defaults(&fields.iter().map(|f| (*f, "")).collect::<Vec<_>>())
    }

    /// Form with initial values; `reset` returns to these.
    pub fn with_defaults(defaults: &[(&str, &str)]) -> Self {
        let defaults: BTreeMap<String, String> =
            defaults.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Self { values: defaults.clone(), defaults, ..Self::default() }
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_owned(), value.into());
    }

    /// Current value, empty for unknown fields.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Enter the submitting phase. Refuses while already submitting.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.message = None;
        self.error = None;
        true
    }

    /// Record a validation failure raised before any request was sent.
    /// Ignored while a request is in flight; its outcome lands later.
    pub fn reject(&mut self, err: &ApiError) {
        if self.submitting {
            return;
        }
        self.message = None;
        self.error = Some(err.user_message());
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.submitting = false;
        self.error = Some(err.user_message());
    }

    /// Record success; optionally restore the default field values.
    pub fn succeed(&mut self, message: impl Into<String>, reset: bool) {
        self.submitting = false;
        self.error = None;
        self.message = Some(message.into());
        if reset {
            self.values = self.defaults.clone();
        }
    }

    /// Restore defaults and clear any outcome.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.submitting = false;
        self.message = None;
        self.error = None;
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
