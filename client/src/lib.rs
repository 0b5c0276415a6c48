//! # client
//!
//! Leptos + WASM page shell for Pitstop: tab navigation, theme and units
//! preferences, toasts, and registration of the offline service worker.
//!
//! Browser access is gated behind the `csr` feature. Without it every
//! browser helper no-ops, so the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the shell.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
