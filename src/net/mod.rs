//! Networking modules for the institute REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and typed request helpers, `endpoints`
//! names every backend resource, `config` fixes the origin, `error` defines
//! what callers can fail with, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
