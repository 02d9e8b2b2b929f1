//! # institute-portal
//!
//! Leptos + WASM client for the institute management backend: course
//! catalogue and cart, enrollment, exam results, and account forms.
//!
//! Data-backed views share one synchronization model (`state::resource`)
//! driven by `util::resource`, and talk to the backend only through the
//! `net::api::Transport` seam.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
