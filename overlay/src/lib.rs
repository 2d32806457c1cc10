//! # nova-chat-overlay
//!
//! Leptos + WASM frontend for the in-game chat overlay. Mounts a single
//! [`app::App`] component that binds a `nova_chat::ChatSession` to the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The game host drives the overlay through `window.postMessage` and receives
//! user actions as JSON posts to `https://nova_chat/<event>`. Everything that
//! decides *what* happens lives in the `nova-chat` crate; this crate only
//! wires browser events in and performs the session's effects.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
