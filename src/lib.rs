//! # futurenest-client
//!
//! Leptos + WASM single-page chat client for the FutureNest RAG backend.
//! The user picks a predefined prompt template, optionally loads it into
//! the backend index, and exchanges messages with the `/chat` endpoint;
//! assistant replies render as sanitized Markdown with citation snippets.
//!
//! This crate contains pages, components, application state, the wire
//! schema, and the HTTP transport. Browser-only behavior sits behind the
//! `hydrate` feature; everything testable is plain Rust.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log bridges and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
