//! # client
//!
//! Leptos + WASM frontend for the token login flow.
//!
//! This crate contains the login and profile pages, the token route guard,
//! the reactive session handle, the `/login` HTTP client, browser token
//! storage, and the peripheral calculator widget.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
