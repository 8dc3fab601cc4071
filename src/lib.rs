#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod models;
pub mod pages;
pub mod sections;
pub mod server_fns;

#[cfg(feature = "ssr")]
pub mod services;
#[cfg(feature = "ssr")]
pub mod state;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
