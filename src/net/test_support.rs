//! Scripted transport double shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{ApiRequest, RawResponse, Transport, TransportFailure};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, TransportFailure>>>,
    pub seen: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportFailure(reason.to_owned())));
        self
    }

    pub fn request_count(&self) -> usize {
        self.seen.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportFailure> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportFailure("no scripted reply".to_owned())))
    }
}
