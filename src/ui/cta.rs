use leptos::prelude::*;

use crate::core::content::CallToAction;
use crate::core::{CtaSkin, IconName};
use crate::ui::config::use_page_config;
use crate::ui::icon::Icon;

/// Purchase link with its social-proof caption.
///
/// Every instance takes its destination from the page config, never from
/// props.
#[component]
pub fn BuyButton(
    cta: CallToAction,
    #[prop(default = CtaSkin::Default)]
    skin: CtaSkin,
) -> impl IntoView {
    let checkout_url = use_page_config().checkout_url.to_string();

    view! {
        <div class="flex flex-col items-center gap-3 w-full max-w-md mx-auto">
            <a href=checkout_url class=skin.button_class()>
                {cta.label}
                <Icon
                    name=IconName::ArrowRight
                    class="inline-block ml-3 w-6 h-6 transition-transform group-hover:translate-x-2"
                />
            </a>
            <div class="flex items-center gap-2 text-green-500/80 animate-pulse">
                <Icon name=IconName::Users class="w-3 h-3" />
                <span class="text-[10px] uppercase tracking-[0.2em] font-bold">{cta.caption}</span>
            </div>
        </div>
    }
}
