// lib.rs - Root module for the catalog_admin library
//
// The catalog core (model, storage, manager, formatting) builds without
// any features. The Leptos UI is compiled in with `ssr` or `hydrate`.

pub mod config;
pub mod error;
pub mod web_app;

pub use error::{CatalogError, Result};

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
