//! Scroll position context
//!
//! Provides, from one app-wide scroll offset (starts at 0):
//! - the header style derived from it
//! - scroll progress for the hero parallax
//!
//! A single passive `scroll` listener feeds both and is removed when the
//! providing owner is cleaned up.

use leptos::prelude::*;

use crate::core::HeaderStyle;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Scroll context shared by the header and hero
#[derive(Clone, Copy)]
pub struct ScrollContext {
    /// Fraction of the scrollable distance covered
    pub progress: ReadSignal<f64>,
    /// Header variant for the current offset; only notifies on change
    pub header: ReadSignal<HeaderStyle>,
}

#[cfg(not(feature = "ssr"))]
struct ScrollListener {
    window: web_sys::Window,
    callback: leptos::wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(not(feature = "ssr"))]
impl ScrollListener {
    fn attach(on_scroll: impl FnMut() + 'static) -> Result<Self, leptos::wasm_bindgen::JsValue> {
        use leptos::wasm_bindgen::JsCast;
        use leptos::wasm_bindgen::closure::Closure;

        let window =
            web_sys::window().ok_or_else(|| leptos::wasm_bindgen::JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut()>::new(on_scroll);

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self { window, callback })
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        use leptos::wasm_bindgen::JsCast;

        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Provide scroll context to the application
pub fn provide_scroll_context() -> ScrollContext {
    let progress = RwSignal::new(0.0);
    let header = RwSignal::new(HeaderStyle::Default);

    // Effects only run in the browser, after hydration
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::ScrollTracker;
        use crate::core::scroll::scroll_progress;
        use leptos::logging::warn;

        Effect::new(move |_| {
            let mut tracker = ScrollTracker::new();
            let mut sync = move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let offset = window.scroll_y().unwrap_or(0.0);
                let viewport = window
                    .inner_height()
                    .ok()
                    .and_then(|height| height.as_f64())
                    .unwrap_or(0.0);
                let document = window
                    .document()
                    .and_then(|document| document.document_element())
                    .map(|root| f64::from(root.scroll_height()))
                    .unwrap_or(0.0);

                progress.set(scroll_progress(offset, document, viewport));
                if let Some(style) = tracker.update(offset) {
                    header.set(style);
                }
            };

            // Page may be restored mid-scroll
            sync();

            match ScrollListener::attach(sync) {
                Ok(listener) => {
                    let listener = StoredValue::new_local(Some(listener));
                    on_cleanup(move || drop(listener.try_update_value(Option::take)));
                }
                Err(err) => warn!("scroll tracking disabled: {err:?}"),
            }
        });
    }

    let ctx = ScrollContext {
        progress: progress.read_only(),
        header: header.read_only(),
    };
    provide_context(ctx);

    ctx
}

/// Use scroll context from anywhere in the component tree
pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext should be provided")
}
