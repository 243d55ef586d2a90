//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::IconName;
use crate::ui::icon::Icon;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#050505] text-neutral-200 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 rounded-full flex items-center justify-center">
                    <Icon name=IconName::AlertCircle class="w-12 h-12 text-neutral-500" />
                </div>

                <h1 class="text-6xl font-serif text-white mb-4">"404"</h1>
                <p class="text-neutral-500 mb-8 max-w-md mx-auto font-light">
                    "A página que você procura não existe."
                </p>

                <A
                    href="/"
                    attr:class="px-8 py-4 bg-white text-black font-black rounded-full transition-all hover:scale-[1.02]"
                >
                    "Voltar ao início"
                </A>
            </div>
        </div>
    }
}
