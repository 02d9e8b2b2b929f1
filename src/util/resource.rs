//! Leptos bindings that drive `ResourceSync` and `SubmissionState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call `use_resource` with a tracked endpoint source. The hook issues
//! one read whenever the source changes or `reload` is called, and settles
//! the result through the generation check so an older response cannot
//! overwrite a newer selection. `use_form` is the write-only counterpart for
//! pages that only submit.
//!
//! Network work is spawned only in the browser (`hydrate`); on the server
//! the state stays as constructed.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::net::api::HttpTransport;
use crate::net::api::{ApiRequest, Method, RequestBody, Transport};
use crate::net::config::ApiConfig;
use crate::net::endpoints::Endpoint;
use crate::net::error::ApiError;
use crate::state::resource::{FetchStatus, RequestToken, ResourceSync};
use crate::state::submission::SubmissionState;

/// API origin provided by the root, or the build default.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_build_env)
}

/// Serialize `body` into a JSON request for `endpoint`.
///
/// # Errors
///
/// `MalformedResponse` if `body` cannot be represented as JSON.
pub fn json_request<B: Serialize + ?Sized>(method: Method, endpoint: &Endpoint, body: &B) -> Result<ApiRequest, ApiError> {
    let value = serde_json::to_value(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    Ok(ApiRequest { method, path: endpoint.path.clone(), body: RequestBody::Json(value) })
}

/// Reactive handle to one synchronized resource.
pub struct ResourceHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<ResourceSync<T>>,
    reload: RwSignal<u64>,
    config: StoredValue<ApiConfig>,
}

impl<T: Send + Sync + 'static> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceHandle<T> {}

impl<T: Clone + Send + Sync + 'static> ResourceHandle<T> {
    /// Re-issue the read for the current source (manual retry).
    pub fn reload(&self) {
        self.reload.update(|n| *n += 1);
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_owned))
    }

    pub fn submitting(&self) -> bool {
        self.state.with(ResourceSync::submitting)
    }

    pub fn submit_error(&self) -> Option<String> {
        self.state.with(|s| s.submit_error().map(str::to_owned))
    }

    /// Optimistically edit loaded data without a round trip.
    pub fn update_data(&self, f: impl FnOnce(&mut T)) {
        self.state.update(|s| {
            s.update_data(f);
        });
    }

    /// Send one write. `on_success` runs with the decoded reply; failures
    /// land in `submit_error` and leave the loaded data alone.
    ///
    /// While a write is in flight further submits are ignored, including
    /// ones whose preparation already failed.
    pub fn submit<R, F>(&self, request: Result<ApiRequest, ApiError>, fallback: &'static str, on_success: F)
    where
        R: DeserializeOwned + 'static,
        F: FnOnce(R) + 'static,
    {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                self.state.update(|s| {
                    if s.begin_submit() {
                        s.finish_submit(Err(e));
                    }
                });
                return;
            }
        };
        if !self.state.try_update(ResourceSync::begin_submit).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let transport = HttpTransport::new(self.config.get_value());
            leptos::task::spawn_local(async move {
                settle_submit(state, &transport, request, fallback, on_success).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, fallback, on_success, self.config);
        }
    }
}

/// Run a write already marked in flight and record its outcome.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
async fn settle_submit<T, R, Tr, F>(
    state: RwSignal<ResourceSync<T>>,
    transport: &Tr,
    request: ApiRequest,
    fallback: &str,
    on_success: F,
) where
    T: Send + Sync + 'static,
    R: DeserializeOwned,
    Tr: Transport + ?Sized,
    F: FnOnce(R),
{
    match crate::net::api::execute::<R, _>(transport, request, fallback).await {
        Ok(reply) => {
            state.try_update(|s| s.finish_submit(Ok(())));
            on_success(reply);
        }
        Err(e) => {
            state.try_update(|s| s.finish_submit(Err(e)));
        }
    }
}

/// Bind a view to the resource named by `source`.
///
/// `source` is tracked: returning a different endpoint re-issues the read,
/// returning `None` returns the resource to idle and drops any pending read.
pub fn use_resource<T, P>(source: P) -> ResourceHandle<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
    P: Fn() -> Option<Endpoint> + 'static,
{
    let state = RwSignal::new(ResourceSync::<T>::new());
    let reload = RwSignal::new(0_u64);
    let config = StoredValue::new(use_api_config());

    Effect::new(move || {
        reload.track();
        let Some((endpoint, token)) = apply_source(state, source()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let transport = HttpTransport::new(config.get_value());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_json::<T, _>(&transport, &endpoint).await;
                let applied = state.try_update(|s| s.settle(token, result)).unwrap_or(false);
                if !applied {
                    leptos::logging::log!("discarded stale response for {}", endpoint.path);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, token);
        }
    });

    ResourceHandle { state, reload, config }
}

/// Start a read for `endpoint`, or drop back to idle when there is none.
/// Either way any read still in flight is superseded.
fn apply_source<T: Send + Sync + 'static>(
    state: RwSignal<ResourceSync<T>>,
    endpoint: Option<Endpoint>,
) -> Option<(Endpoint, RequestToken)> {
    let Some(endpoint) = endpoint else {
        if state.with_untracked(|s| s.status() != FetchStatus::Idle) {
            state.update(ResourceSync::reset);
        }
        return None;
    };
    let token = state.try_update(ResourceSync::begin)?;
    Some((endpoint, token))
}

/// Reactive handle to one submit-only form.
#[derive(Clone, Copy)]
pub struct FormHandle {
    pub state: RwSignal<SubmissionState>,
    config: StoredValue<ApiConfig>,
}

impl FormHandle {
    pub fn value(&self, field: &'static str) -> String {
        self.state.with(|s| s.get(field).to_owned())
    }

    pub fn set(&self, field: &'static str, value: String) {
        self.state.update(|s| s.set(field, value));
    }

    pub fn submitting(&self) -> bool {
        self.state.with(SubmissionState::submitting)
    }

    pub fn message(&self) -> Option<String> {
        self.state.with(|s| s.message().map(str::to_owned))
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_owned))
    }

    /// Submit a prepared request.
    ///
    /// A prepared `Err` (validation) is shown without touching the network.
    /// On success `on_success` turns the reply into the confirmation text;
    /// `reset` restores the default field values. Ignored while a request
    /// is already in flight.
    pub fn submit<R, F>(&self, prepared: Result<ApiRequest, ApiError>, fallback: &'static str, reset: bool, on_success: F)
    where
        R: DeserializeOwned + 'static,
        F: FnOnce(R) -> String + 'static,
    {
        if self.state.with_untracked(SubmissionState::submitting) {
            return;
        }
        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                self.state.update(|s| s.reject(&e));
                return;
            }
        };
        if !self.state.try_update(SubmissionState::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let transport = HttpTransport::new(self.config.get_value());
            leptos::task::spawn_local(async move {
                settle_form(state, &transport, request, fallback, reset, on_success).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, fallback, reset, on_success, self.config);
        }
    }
}

/// Run a form request already marked in flight and record its outcome.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
async fn settle_form<R, Tr, F>(
    state: RwSignal<SubmissionState>,
    transport: &Tr,
    request: ApiRequest,
    fallback: &str,
    reset: bool,
    on_success: F,
) where
    R: DeserializeOwned,
    Tr: Transport + ?Sized,
    F: FnOnce(R) -> String,
{
    match crate::net::api::execute::<R, _>(transport, request, fallback).await {
        Ok(reply) => {
            let message = on_success(reply);
            state.try_update(|s| s.succeed(message, reset));
        }
        Err(e) => {
            state.try_update(|s| s.fail(&e));
        }
    }
}

pub fn use_form(fields: &[&str]) -> FormHandle {
    FormHandle {
        state: RwSignal::new(SubmissionState::new(fields)),
        config: StoredValue::new(use_api_config()),
    }
}
