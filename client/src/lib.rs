//! # chat-widget
//!
//! Leptos + WASM chat widget. A user message is posted to `/send_message` and
//! the reply, or an error describing what went wrong, is appended to a
//! scrolling message list.
//!
//! The submit flow lives in [`controller`] behind the [`controller::ChatView`]
//! and [`net::api::ChatTransport`] seams, so it is exercised natively without
//! a browser. [`components::chat_panel`] binds it to Leptos signals.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
