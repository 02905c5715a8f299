//! # tally-client
//!
//! Leptos + WASM frontend for the Tally counter widget.
//!
//! This crate contains the counter and theme state, the store that persists
//! them to browser storage, and the page and components rendering them. It is
//! compiled with `ssr` into the server binary and with `hydrate` into the
//! browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod persistence;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
