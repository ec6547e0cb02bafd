//! # vibe-collector
//!
//! Leptos + WASM client for the Vibe Collector gallery: image-based
//! inspiration items ("vibes") organized into named collections ("boards").
//!
//! This crate contains pages, components, application state, and the thin
//! clients for the two external collaborators: the session provider
//! (identity/auth) and the asset store (binary upload returning a public
//! URL). All domain logic lives in plain state structs and pure functions
//! under `state`, so it runs in host-side tests without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
