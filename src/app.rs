use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::{provide_page_config, provide_scroll_context};

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::MetaTags;

    use crate::core::Config;
    use crate::core::config::CHECKOUT_URL_META;
    use crate::ui::reveal::{REVEAL_CSS, boot_script};

    let checkout_url = Config::global().checkout_url.to_string();

    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CHECKOUT_URL_META content=checkout_url/>
                // Runs before the body is parsed so reveal wrappers never flash
                <script inner_html=boot_script()></script>
                <style inner_html=REVEAL_CSS></style>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-[#050505]">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_page_config();
    provide_scroll_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/longer-method.css"/>

        <Title text="Longer Method - Protocolo Oficial"/>
        <Meta
            name="description"
            content="Longer Method: protocolo de exercícios e técnicas naturais. Acesso imediato e 100% discreto."
        />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
