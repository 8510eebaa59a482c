//! # dashboard
//!
//! Leptos + WASM frontend for the wireless monitoring dashboard.
//!
//! The interesting part is the global tap selector: `state::tap_selection`
//! reconciles a persisted scope against the live tap inventory, and
//! `components::tap_selector` renders it and publishes the committed scope
//! to the rest of the UI.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
