//! Read/write synchronization state for one backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every data-backed view binds to a `ResourceSync`: reads move it through
//! idle -> loading -> ready/error, writes toggle `submitting` and report
//! their own failure without disturbing what was already loaded.
//!
//! DESIGN
//! ======
//! Each read is stamped with a generation token. Only the response carrying
//! the latest token may settle the state, so when a dependency changes twice
//! in quick succession the last request sent wins regardless of which
//! response arrives last. Superseded requests are not cancelled; their
//! results are dropped on arrival.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use crate::net::error::ApiError;

/// Phase of a read, without its payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No read has been triggered yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Read state with its payload. Ready and error are exclusive by shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn status(&self) -> FetchStatus {
        match self {
            Self::Idle => FetchStatus::Idle,
            Self::Loading => FetchStatus::Loading,
            Self::Ready(_) => FetchStatus::Ready,
            Self::Error(_) => FetchStatus::Error,
        }
    }
}

/// Identifies one issued read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Read state plus write-in-flight tracking for one resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceSync<T> {
    state: FetchState<T>,
    generation: u64,
    submitting: bool,
    submit_error: Option<String>,
}

impl<T> Default for ResourceSync<T> {
    fn default() -> Self {
        Self { state: FetchState::Idle, generation: 0, submitting: false, submit_error: None }
    }
}

impl<T> ResourceSync<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a read: enter `Loading` and supersede any read in flight.
    pub fn begin(&mut self) -> RequestToken {
        self.generation += 1;
        self.state = FetchState::Loading;
        RequestToken(self.generation)
    }

    /// Return to `Idle` and supersede any read in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Apply a read result. Returns `false` and leaves state untouched when
    /// `token` was superseded.
    pub fn settle(&mut self, token: RequestToken, result: Result<T, ApiError>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Ready(data),
            Err(e) => FetchState::Error(e.user_message()),
        };
        true
    }

    /// Mark a write as in flight. Refuses while another write is pending.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.submit_error = None;
        true
    }

    /// Finish a write. Failures are recorded separately from read state.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.submitting = false;
        self.submit_error = result.err().map(|e| e.user_message());
    }

    /// Optimistically edit loaded data in place. No-op unless ready.
    pub fn update_data(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match &mut self.state {
            FetchState::Ready(data) => {
                f(data);
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status()
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
