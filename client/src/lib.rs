//! # client
//!
//! Leptos + WASM frontend for the SURF customer-feedback priorities
//! dashboard. Renders one `/api/priorities` envelope as three coordinated
//! regions: navigation sidebar, searchable list, and item detail.
//!
//! The view state itself (items, filter, selection, load status) lives in
//! the `feedback` crate; this crate wires it into reactive signals and
//! markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
