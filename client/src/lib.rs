//! # client
//!
//! Leptos + WASM frontend for registering users against a remote Users API
//! and browsing the resulting roster.
//!
//! This crate contains the page, its components, the registration state
//! machine, and the REST client for the `/users` collection. The host crate
//! server-renders [`app::App`]; the browser build (feature `hydrate`) takes
//! over through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
