//! Page configuration context
//!
//! The server resolves `Config` from the environment and writes the checkout
//! URL into a `<meta>` tag of the document shell. The hydrated client reads
//! the tag back, so both renders link to the same destination.

use leptos::prelude::*;

use crate::core::Config;

#[cfg(not(feature = "ssr"))]
use crate::core::config::{CHECKOUT_URL_META, CheckoutUrl};
#[cfg(not(feature = "ssr"))]
use leptos::logging::warn;

#[cfg(feature = "ssr")]
fn resolve_config() -> Config {
    Config::global().clone()
}

#[cfg(not(feature = "ssr"))]
fn resolve_config() -> Config {
    let raw = leptos::web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| {
            document
                .query_selector(&format!("meta[name=\"{CHECKOUT_URL_META}\"]"))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));

    match raw.as_deref().map(CheckoutUrl::parse) {
        Some(Ok(checkout_url)) => Config { checkout_url },
        Some(Err(err)) => {
            warn!("ignoring {CHECKOUT_URL_META} meta tag: {err}");
            Config::default()
        }
        None => Config::default(),
    }
}

/// Provide page configuration to the application
pub fn provide_page_config() -> Config {
    let config = resolve_config();
    provide_context(config.clone());
    config
}

/// Use page configuration from anywhere in the component tree
pub fn use_page_config() -> Config {
    use_context::<Config>().unwrap_or_default()
}
