//! # recipe-finder
//!
//! Leptos + WASM frontend for looking up recipes in TheMealDB catalog.
//!
//! This crate contains the page, components, the shared recipe state, the
//! catalog HTTP client, and the dispatcher that connects user actions to
//! catalog requests. The `server/` crate renders the shell with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
