//! # client
//!
//! Leptos + WASM storefront for Game Haven: catalog, game details, cart and
//! checkout, order history, and the admin dashboard.
//!
//! Every request goes to a relative `/api/...` path; the host server forwards
//! it to the store API. Page behavior that can be decided without a browser
//! (fetch lifecycle, debounce, cart and admin rules) lives in `state` and
//! `util` as plain Rust and is unit tested there.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
