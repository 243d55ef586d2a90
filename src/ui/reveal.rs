//! Reveal-on-scroll wrapper
//!
//! `<Reveal>` marks its children `data-reveal="hidden"` and hands its element
//! to an `IntersectionObserver`. The first intersection flips the latch, the
//! transition plays once and the observer disconnects. Browsers without the
//! observer API get the content revealed immediately.
//!
//! Hiding is opt-in: `REVEAL_CSS` only hides wrappers under the
//! `READY_CLASS` root class, which `boot_script` sets in the document head.
//! Without JavaScript the class never appears, and if the bundle has not
//! hydrated within `HYDRATION_DEADLINE_MS` the script removes it again.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{RevealDirection, RevealLatch, RevealOptions};

/// Class carried by every reveal wrapper
pub const REVEAL_CLASS: &str = "reveal";

/// Root class meaning "scripts run, reveal wrappers may hide"
pub const READY_CLASS: &str = "js";

/// Root class set once the client bundle has hydrated
pub const HYDRATED_CLASS: &str = "hydrated";

/// How long the boot script waits for hydration before showing everything
pub const HYDRATION_DEADLINE_MS: u32 = 4000;

/// Hidden look of a reveal wrapper, active only under `READY_CLASS`
pub const REVEAL_CSS: &str = ".js .reveal[data-reveal=hidden] { opacity: 0; transform: translateY(var(--reveal-offset, 0px)); }";

/// Inline head script: opt into hidden reveals, back out if hydration stalls
pub fn boot_script() -> String {
    format!(
        "(function(r){{r.classList.add('{READY_CLASS}');setTimeout(function(){{\
         if(!r.classList.contains('{HYDRATED_CLASS}')){{r.classList.remove('{READY_CLASS}');}}}},\
         {HYDRATION_DEADLINE_MS});}})(document.documentElement);"
    )
}

/// Tell the boot script hydration finished
#[cfg(not(feature = "ssr"))]
pub fn mark_hydrated() {
    let root = leptos::web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let _ = root.class_list().add_1(HYDRATED_CLASS);
    }
}

#[cfg(not(feature = "ssr"))]
mod observer {
    use leptos::prelude::*;
    use leptos::wasm_bindgen::JsCast;
    use leptos::wasm_bindgen::JsValue;
    use leptos::wasm_bindgen::closure::Closure;
    use leptos::web_sys;

    use crate::core::{RevealLatch, RevealOptions};

    type Callback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// Observer bound to one reveal wrapper; disconnects on drop
    pub struct RevealObserver {
        observer: web_sys::IntersectionObserver,
        _callback: Callback,
    }

    impl RevealObserver {
        pub fn attach(
            element: &web_sys::Element,
            options: &RevealOptions,
            latch: RwSignal<RevealLatch>,
        ) -> Result<Self, JsValue> {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
                return Err(JsValue::from_str("IntersectionObserver is not supported"));
            }

            let callback = Callback::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let intersecting = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                        .any(|entry| entry.is_intersecting());

                    latch.maybe_update(|latch| latch.observe(intersecting).is_triggered());
                    if latch.with_untracked(RevealLatch::is_revealed) {
                        observer.disconnect();
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(&options.root_margin());
            init.set_threshold(&JsValue::from_f64(0.0));

            let observer =
                web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Fade-and-slide entrance gated by viewport intersection
#[component]
pub fn Reveal(
    /// Delay before the entrance transition, in seconds
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(default = RevealDirection::Up)]
    direction: RevealDirection,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let latch = RwSignal::new(RevealLatch::new(RevealOptions::new(delay, direction)));
    let node_ref = NodeRef::<Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;

        let observer = StoredValue::new_local(None::<observer::RevealObserver>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if latch.with_untracked(RevealLatch::is_revealed) {
                return;
            }

            let options = latch.with_untracked(|latch| *latch.options());
            match observer::RevealObserver::attach(&element, &options, latch) {
                Ok(handle) => observer.set_value(Some(handle)),
                Err(err) => {
                    warn!("reveal observer unavailable, showing content: {err:?}");
                    latch.maybe_update(|latch| latch.force_reveal().is_triggered());
                }
            }
        });

        on_cleanup(move || drop(observer.try_update_value(Option::take)));
    }

    let style = latch.with_untracked(|latch| latch.style().to_css());
    let classes = if class.is_empty() {
        REVEAL_CLASS.to_string()
    } else {
        format!("{} {}", REVEAL_CLASS, class)
    };

    view! {
        <div
            node_ref=node_ref
            class=classes
            style=style
            data-reveal=move || latch.with(|latch| latch.phase().to_string())
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_rule_requires_ready_class() {
        assert!(REVEAL_CSS.starts_with(&format!(".{READY_CLASS} .{REVEAL_CLASS}[data-reveal=hidden]")));
        assert!(REVEAL_CSS.contains("var(--reveal-offset"));
    }

    #[test]
    fn test_boot_script_backs_out_without_hydration() {
        let script = boot_script();

        assert!(script.contains("r.classList.add('js')"));
        assert!(script.contains("r.classList.contains('hydrated')"));
        assert!(script.contains("r.classList.remove('js')"));
        assert!(script.contains("4000"));
        assert!(!script.contains('\n'));
    }
}
