use leptos::prelude::*;

use crate::core::{Disclosure, FaqEntry};
use crate::ui::icon::Icon;

/// FAQ row: question button and collapsible answer.
///
/// Each row owns its state, so any number of rows can be open at once.
#[component]
pub fn FaqItem(entry: FaqEntry) -> impl IntoView {
    let state = RwSignal::new(Disclosure::new(entry.id.clone()));

    view! { <FaqRow entry=entry state=state /> }
}

#[component]
fn FaqRow(entry: FaqEntry, state: RwSignal<Disclosure>) -> impl IntoView {
    let panel_id = state.with_untracked(Disclosure::panel_id);

    view! {
        <div id=entry.id class="border-b border-white/5 last:border-0">
            <button
                type="button"
                class="w-full py-6 flex justify-between items-center text-left hover:text-white transition-colors"
                on:click=move |_| state.update(|item| {
                    item.toggle();
                })
                aria-expanded=move || state.with(Disclosure::is_open).to_string()
                aria-controls=panel_id.clone()
            >
                <span class="text-lg font-light tracking-wide">{entry.question}</span>
                {move || {
                    let (icon, class) = state.with(|item| (item.indicator(), item.indicator_class()));
                    view! { <Icon name=icon class=class /> }
                }}
            </button>
            <div
                id=panel_id
                role="region"
                class=move || state.with(Disclosure::panel_class)
                aria-hidden=move || (!state.with(Disclosure::is_open)).to_string()
            >
                <p class="pb-6 text-neutral-500 font-light leading-relaxed">{entry.answer}</p>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::PageContent;
    use leptos::tachys::view::RenderHtml;

    fn security_entry() -> FaqEntry {
        PageContent::embedded()
            .unwrap()
            .faq_entry("Esse site é seguro?")
            .cloned()
            .unwrap()
    }

    fn render(entry: &FaqEntry, state: RwSignal<Disclosure>) -> String {
        let entry = entry.clone();
        view! { <FaqRow entry=entry state=state /> }.to_html()
    }

    #[test]
    fn test_row_markup_follows_state() {
        let owner = Owner::new();
        owner.with(|| {
            let entry = security_entry();
            let state = RwSignal::new(Disclosure::new(entry.id.clone()));

            let collapsed = render(&entry, state);
            assert!(collapsed.contains("aria-expanded=\"false\""));
            assert!(collapsed.contains("aria-hidden=\"true\""));
            assert!(collapsed.contains("max-h-0 opacity-0"));
            assert!(collapsed.contains(&format!("aria-controls=\"{}-answer\"", entry.id)));

            state.update(|item| {
                item.toggle();
            });
            let open = render(&entry, state);
            assert!(open.contains("aria-expanded=\"true\""));
            assert!(open.contains("aria-hidden=\"false\""));
            assert!(open.contains("max-h-96 opacity-100"));
            assert!(open.contains("Sim, utilizamos protocolos"));

            state.update(|item| {
                item.toggle();
            });
            assert_eq!(render(&entry, state), collapsed);
        });
    }

    #[test]
    fn test_indicator_switches_icon() {
        let owner = Owner::new();
        owner.with(|| {
            let entry = security_entry();
            let state = RwSignal::new(Disclosure::new(entry.id.clone()));
            let collapsed = render(&entry, state);

            state.update(|item| {
                item.toggle();
            });
            let open = render(&entry, state);

            assert_ne!(collapsed, open);
            assert_eq!(
                collapsed.matches("<path").count() - 1,
                open.matches("<path").count()
            );
        });
    }
}
