//! Backend origin configuration.
//!
//! The portal talks to one fixed REST origin. Builds default to same-origin
//! requests; `INSTITUTE_API_BASE` at compile time points a build elsewhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where API requests are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Config baked in at build time, or same-origin when unset.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("INSTITUTE_API_BASE").unwrap_or_default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or origin-relative) URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }
}
