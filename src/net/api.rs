//! REST transport and typed request helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpTransport` reports a transport
//! failure, and tests substitute their own `Transport`.
//!
//! ERROR HANDLING
//! ==============
//! Every helper performs exactly one transport call and returns
//! `Result<T, ApiError>`. Nothing is retried or cached; the view decides
//! whether to offer a manual retry.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::endpoints::Endpoint;
use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Multipart body: text fields plus browser file handles.
#[derive(Clone, Debug, Default)]
pub struct MultipartForm {
    text: Vec<(String, String)>,
    #[cfg(feature = "hydrate")]
    files: Vec<(String, web_sys::File)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.text.push((name.to_owned(), value.into()));
        self
    }

    pub fn text_fields(&self) -> &[(String, String)] {
        &self.text
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn file(mut self, name: &str, file: web_sys::File) -> Self {
        self.files.push((name.to_owned(), file));
        self
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, String> {
        let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
        for (name, value) in &self.text {
            form.append_with_str(name, value).map_err(|e| format!("{e:?}"))?;
        }
        for (name, file) in &self.files {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(|e| format!("{e:?}"))?;
        }
        Ok(form)
    }
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// One outbound request, relative to the configured origin.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self { method: Method::Get, path: path.to_owned(), body: RequestBody::Empty }
    }
}

/// Raw response as seen by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request never produced a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportFailure(pub String);

/// Sends requests to the backend. Swapped for a scripted double in tests.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Perform one request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportFailure`] when no HTTP response was received.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportFailure>;
}

/// Browser HTTP transport.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportFailure> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Request, RequestBuilder};

            let url = self.config.url(&request.path);
            let builder: RequestBuilder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            let built = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(form) => builder.body(form.to_form_data().map_err(TransportFailure)?),
            }
            .map_err(|e| TransportFailure(e.to_string()))?;

            let resp = built.send().await.map_err(|e| TransportFailure(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(TransportFailure("not available on server".to_owned()))
        }
    }
}

/// Decode a response into `T`, or into the matching [`ApiError`].
///
/// An empty 2xx body decodes as JSON `null`, so `()` and `Option<_>`
/// targets accept bodiless acknowledgements.
///
/// # Errors
///
/// `Request` for non-2xx, `MalformedResponse` for undecodable 2xx bodies.
pub fn interpret<T: DeserializeOwned>(response: &RawResponse, fallback: &str) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::from_response(response.status, &response.body, fallback));
    }
    let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

/// Send `request` and decode the result.
///
/// # Errors
///
/// See [`interpret`]; transport failures map to `Request` with no status.
pub async fn execute<T, R>(transport: &R, request: ApiRequest, fallback: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    let method = request.method;
    let path = request.path.clone();
    let response = transport.execute(request).await.map_err(|e| {
        leptos::logging::warn!("{} {path} failed: {e}", method.as_str());
        ApiError::transport(fallback)
    })?;
    let result = interpret(&response, fallback);
    if let Err(e) = &result {
        leptos::logging::warn!("{} {path} -> {}: {e}", method.as_str(), response.status);
    }
    result
}

/// `GET` an endpoint and decode its JSON body.
///
/// # Errors
///
/// See [`execute`].
pub async fn fetch_json<T, R>(transport: &R, endpoint: &Endpoint) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    execute(transport, ApiRequest::get(&endpoint.path), endpoint.failure_message).await
}

/// Send a JSON body and decode the JSON reply.
///
/// # Errors
///
/// `MalformedResponse` if `body` cannot be serialized, otherwise see [`execute`].
pub async fn send_json<T, B, R>(transport: &R, method: Method, endpoint: &Endpoint, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
    R: Transport + ?Sized,
{
    let value = serde_json::to_value(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    let request = ApiRequest { method, path: endpoint.path.clone(), body: RequestBody::Json(value) };
    execute(transport, request, endpoint.failure_message).await
}

/// `POST` a multipart form and decode the JSON reply.
///
/// # Errors
///
/// See [`execute`].
pub async fn send_multipart<T, R>(transport: &R, endpoint: &Endpoint, form: MultipartForm) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    let request = ApiRequest { method: Method::Post, path: endpoint.path.clone(), body: RequestBody::Multipart(form) };
    execute(transport, request, endpoint.failure_message).await
}
