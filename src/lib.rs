//! Bilingual single-page portfolio rendered with Leptos.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same crate builds the server binary (`ssr`) and the browser bundle
//! (`hydrate`). Rules that decide anything (validation, spam screening, the
//! contact submit state machine, admin authorization, persisted stores) are
//! plain Rust with native tests; browser calls sit behind the `hydrate`
//! feature and are no-ops on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
