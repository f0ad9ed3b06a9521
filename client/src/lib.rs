//! # client
//!
//! Leptos + WASM frontend for the Wall of Love board.
//!
//! This crate contains the app shell, pages, components, application state,
//! and the REST client. The server crate links it with the `ssr` feature to
//! render routes; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
