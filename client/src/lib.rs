//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront header and cart dropdown.
//!
//! This crate contains pages, components, the reactive cart state, and the
//! browser `localStorage` binding for the `cart` crate's storage trait. All
//! cart arithmetic and persistence rules live in `cart`; this crate only
//! wires them to signals and markup.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger already installed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
