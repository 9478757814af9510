//! Anteroom - access gate for a self-hosted web application
//!
//! A login/registration page that fronts an external authentication backend,
//! built with Leptos and WebAssembly. The form's shape is driven by runtime
//! configuration injected by the server.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
