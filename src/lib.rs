//! Longer Method - sales landing page
//!
//! A single-page marketing site with scroll-triggered reveals, a compacting
//! header and an FAQ, built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
    crate::ui::reveal::mark_hydrated();
}
