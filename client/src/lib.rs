//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! The page itself is static, author-curated content. The only behavior lives
//! in three small cores under [`util`]: theme resolution and persistence,
//! one-shot scroll reveal, and the typewriter headline. Each core talks to
//! the browser through a narrow trait so it can be exercised without one.

pub mod app;
pub mod components;
pub mod content;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
