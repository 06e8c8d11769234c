//! Browser page for the centicle grid overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single Leptos page: the canvas map (driven by `canvas::Engine`) plus two
//! text outputs, the graticule latitude/longitude and the list of active
//! centicles. All grid state lives in the engine; Leptos state only mirrors
//! what the text outputs show.
//!
//! Browser-only code is gated behind the `csr` feature so the state and
//! component modules also build (and test) natively.

pub mod app;
pub mod components;
pub mod state;
#[cfg(feature = "csr")]
pub mod util;

/// Install logging and the panic hook, then mount the page on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
