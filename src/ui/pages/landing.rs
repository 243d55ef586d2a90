//! Landing page component
//!
//! The Longer Method sales page, top to bottom:
//! - Fixed header that compacts once the page scrolls
//! - Hero with a parallax background
//! - Urgency statement
//! - Specialist profiles
//! - Access levels with the first call-to-action
//! - Embedded presentation video
//! - Launch offer with the inverted call-to-action
//! - Benefit cards
//! - FAQ with independent disclosures
//! - Privacy section with the last call-to-action
//! - Footer with legal disclaimer

use leptos::logging::error;
use leptos::prelude::*;

use crate::core::content::{
    Access, Benefit, CallToAction, Faq, Footer, Hero, Offer, Privacy, Specialist, Specialists,
    Urgency, VideoEmbed,
};
use crate::core::scroll::parallax_shift_percent;
use crate::core::{CtaSkin, IconName, PageContent, SectionId};
use crate::ui::config::use_page_config;
use crate::ui::cta::BuyButton;
use crate::ui::disclosure::FaqItem;
use crate::ui::icon::Icon;
use crate::ui::reveal::Reveal;
use crate::ui::scroll::use_scroll_context;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let content = match PageContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            error!("landing page content rejected: {err}");
            return view! { <ContentUnavailable /> }.into_any();
        }
    };

    let sections = content
        .sections()
        .into_iter()
        .map(|section| render_section(section.id, &content))
        .collect_view();

    view! {
        <div class="relative selection:bg-green-900 selection:text-white overflow-x-hidden bg-[#050505] text-neutral-200">
            <Header brand=content.brand.clone() announcement=content.announcement.clone() />
            {sections}
        </div>
    }
    .into_any()
}

fn render_section(id: SectionId, content: &PageContent) -> AnyView {
    let cta = content.cta.clone();
    match id {
        SectionId::Hero => view! { <HeroSection hero=content.hero.clone() /> }.into_any(),
        SectionId::Urgency => {
            view! { <UrgencySection urgency=content.urgency.clone() /> }.into_any()
        }
        SectionId::Specialists => {
            view! { <SpecialistsSection specialists=content.specialists.clone() /> }.into_any()
        }
        SectionId::Access => {
            view! { <AccessSection access=content.access.clone() cta=cta /> }.into_any()
        }
        SectionId::Video => view! { <VideoSection video=content.video.clone() /> }.into_any(),
        SectionId::Offer => {
            view! { <OfferSection offer=content.offer.clone() cta=cta /> }.into_any()
        }
        SectionId::Benefits => {
            view! { <BenefitsSection benefits=content.benefits.clone() /> }.into_any()
        }
        SectionId::Faq => view! { <FaqSection faq=content.faq.clone() /> }.into_any(),
        SectionId::Privacy => {
            view! { <PrivacySection privacy=content.privacy.clone() cta=cta /> }.into_any()
        }
        SectionId::Footer => {
            view! { <PageFooter brand=content.brand.clone() footer=content.footer.clone() /> }
                .into_any()
        }
    }
}

/// Header component; style follows the shared scroll offset
#[component]
fn Header(brand: String, announcement: String) -> impl IntoView {
    let scroll = use_scroll_context();

    view! {
        <nav
            class=move || scroll.header.get().classes()
            data-header-style=move || scroll.header.get().to_string()
        >
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-4">
                <div class="text-xl font-serif tracking-widest uppercase italic font-medium">
                    {brand}
                </div>
                <div class="text-[#22c55e] text-[10px] md:text-xs font-bold uppercase tracking-[0.15em] text-center
                            bg-[#22c55e]/10 px-4 py-2 rounded-full border border-[#22c55e]/20">
                    {announcement}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn HeroSection(hero: Hero) -> impl IntoView {
    let scroll = use_scroll_context();
    let background_shift = move || {
        format!(
            "transform: translateY({}%)",
            parallax_shift_percent(scroll.progress.get())
        )
    };

    view! {
        <section id=SectionId::Hero.anchor() class="relative min-h-[75vh] flex items-center pt-32 overflow-hidden">
            <div
                class="absolute inset-0 bg-[radial-gradient(circle_at_50%_40%,_#0a1a0a_0%,_transparent_70%)] -z-10"
                style=background_shift
            />
            <div class="container mx-auto px-6">
                <div class="max-w-5xl mx-auto text-center">
                    <Reveal>
                        <span class="text-[10px] uppercase tracking-[0.5em] text-green-500 font-bold mb-6 block">
                            {hero.eyebrow}
                        </span>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-serif mb-8 leading-[1.1] text-white">
                            {hero.title}
                        </h1>
                    </Reveal>

                    <Reveal delay=0.2>
                        <p class="text-xl md:text-3xl text-neutral-400 font-light leading-relaxed max-w-3xl mx-auto italic">
                            {hero.subtitle}
                        </p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn UrgencySection(urgency: Urgency) -> impl IntoView {
    view! {
        <section id=SectionId::Urgency.anchor() class="py-20 bg-white text-black">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto text-center space-y-8">
                    <Reveal>
                        <div class="flex justify-center mb-6">
                            <Icon name=IconName::AlertCircle class="w-12 h-12 text-red-600" />
                        </div>
                        <h2 class="text-2xl md:text-4xl font-bold uppercase tracking-tight leading-tight">
                            {urgency.headline}
                        </h2>
                        <p class="text-xl md:text-2xl font-medium text-neutral-700 leading-relaxed border-l-4 border-red-600 pl-6 text-left my-10 italic">
                            {urgency.quote}
                        </p>
                        <p class="text-lg md:text-xl font-bold uppercase text-red-700 tracking-wide">
                            {urgency.decision}
                        </p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SpecialistsSection(specialists: Specialists) -> impl IntoView {
    view! {
        <section id=SectionId::Specialists.anchor() class="py-32 bg-[#080808] border-y border-white/5">
            <div class="container mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-24">
                        <span class="text-[10px] uppercase tracking-[0.5em] text-neutral-500 mb-6 block">
                            {specialists.eyebrow}
                        </span>
                        <h2 class="text-4xl md:text-5xl font-serif text-white">{specialists.title}</h2>
                    </div>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-16 max-w-6xl mx-auto">
                    {specialists
                        .people
                        .into_iter()
                        .enumerate()
                        .map(|(i, person)| {
                            view! {
                                <Reveal delay={0.2 * (i + 1) as f64}>
                                    <SpecialistCard person=person />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Profile card; the image box keeps its size when the image fails to load
#[component]
fn SpecialistCard(person: Specialist) -> impl IntoView {
    view! {
        <div class="bg-[#0c0c0c] p-8 md:p-12 rounded-[2.5rem] border border-white/5 h-full flex flex-col shadow-2xl">
            <div class="flex flex-col items-center text-center mb-10">
                <img
                    src=person.image_url
                    alt=person.name.clone()
                    width="192"
                    height="192"
                    loading="lazy"
                    decoding="async"
                    class="w-48 h-48 rounded-full object-cover mb-6 border-2 border-white/10 bg-neutral-900"
                />
                <h3 class="text-2xl font-serif text-white italic">{person.name}</h3>
            </div>
            <div class="space-y-6 text-neutral-400 font-light italic text-sm leading-relaxed">
                {person
                    .quotes
                    .into_iter()
                    .map(|quote| view! { <p>{format!("\"{}\"", quote)}</p> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn AccessSection(access: Access, cta: CallToAction) -> impl IntoView {
    view! {
        <section id=SectionId::Access.anchor() class="py-32 bg-black relative">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <Reveal>
                        <div class="text-center mb-20">
                            <span class="text-[10px] uppercase tracking-[0.5em] text-green-500 mb-6 block">
                                {access.eyebrow}
                            </span>
                            <h2 class="text-3xl md:text-5xl font-serif text-white mb-6 uppercase">
                                {access.title}
                            </h2>
                        </div>
                    </Reveal>

                    <div class="grid md:grid-cols-2 gap-8">
                        {access
                            .levels
                            .into_iter()
                            .enumerate()
                            .map(|(i, level)| {
                                view! {
                                    <Reveal
                                        delay={0.1 * i as f64}
                                        class="bg-neutral-900/50 p-8 rounded-3xl border border-white/5"
                                    >
                                        <h3 class={format!(
                                            "text-xl font-bold uppercase tracking-widest mb-6 {}", level.accent
                                        )}>
                                            {level.title}
                                        </h3>
                                        <ul class="space-y-4">
                                            {level
                                                .items
                                                .into_iter()
                                                .map(|item| {
                                                    view! {
                                                        <li class="flex items-center gap-3 text-neutral-400">
                                                            <Icon name=IconName::CheckCircle class="w-5 h-5 text-neutral-700" />
                                                            <span class="font-light">{item}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Reveal delay=0.5 class="mt-16 text-center">
                        <BuyButton cta=cta />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Presentation video; the framed box holds its aspect ratio without the player
#[component]
fn VideoSection(video: VideoEmbed) -> impl IntoView {
    view! {
        <section id=SectionId::Video.anchor() class="py-24 bg-[#050505]">
            <div class="container mx-auto px-6">
                <div class="max-w-5xl mx-auto">
                    <div class="relative aspect-video rounded-[2.5rem] overflow-hidden border border-white/10 shadow-2xl bg-neutral-900">
                        <iframe
                            src=video.src
                            class="absolute inset-0 w-full h-full border-0"
                            allow=video.allow
                            allowfullscreen=true
                            sandbox="allow-scripts allow-same-origin allow-presentation"
                            title=video.title
                            {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                            referrerpolicy="strict-origin-when-cross-origin"
                        ></iframe>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn OfferSection(offer: Offer, cta: CallToAction) -> impl IntoView {
    view! {
        <section id=SectionId::Offer.anchor() class="py-32 bg-white text-black text-center">
            <div class="container mx-auto px-6">
                <Reveal>
                    <h2 class="text-3xl uppercase font-black tracking-tight mb-4">{offer.title}</h2>
                    <div class="mb-10">
                        <span class="text-neutral-400 line-through text-2xl mr-4 italic">
                            {offer.original_price}
                        </span>
                        <span class="text-6xl font-black text-red-600 block md:inline mt-4">
                            {offer.price}
                        </span>
                    </div>
                    <p class="text-2xl font-bold mb-12">
                        {offer.installments_prefix} " "
                        <span class="text-4xl">{offer.installment_price}</span>
                    </p>
                    <BuyButton cta=cta skin=CtaSkin::Inverted />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn BenefitsSection(benefits: Vec<Benefit>) -> impl IntoView {
    view! {
        <section id=SectionId::Benefits.anchor() class="py-32 bg-[#050505]">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-10">
                    {benefits
                        .into_iter()
                        .enumerate()
                        .map(|(i, benefit)| {
                            view! {
                                <Reveal delay={0.2 * i as f64}>
                                    <div class="p-12 bg-white/[0.02] border border-white/5 rounded-[2rem] hover:border-green-500/30 transition-all h-full">
                                        <div class="mb-8">
                                            <Icon name=benefit.icon class="w-8 h-8 text-green-500" />
                                        </div>
                                        <h3 class="text-2xl font-serif mb-6 text-white">{benefit.title}</h3>
                                        <p class="text-neutral-400 leading-relaxed font-light text-sm italic">
                                            {benefit.description}
                                        </p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ section component
#[component]
fn FaqSection(faq: Faq) -> impl IntoView {
    view! {
        <section id=SectionId::Faq.anchor() class="py-32 bg-black border-t border-white/5">
            <div class="container mx-auto px-6">
                <div class="max-w-3xl mx-auto">
                    <Reveal>
                        <h2 class="text-4xl font-serif text-white mb-16 text-center">{faq.title}</h2>
                    </Reveal>
                    <div class="space-y-2">
                        {faq
                            .entries
                            .into_iter()
                            .map(|entry| view! { <FaqItem entry=entry /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PrivacySection(privacy: Privacy, cta: CallToAction) -> impl IntoView {
    view! {
        <section id=SectionId::Privacy.anchor() class="py-32 border-t border-white/5 bg-black">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto flex flex-col md:flex-row items-center gap-16">
                    <Reveal class="flex-1">
                        <h2 class="text-3xl font-serif text-white mb-6 italic">{privacy.title}</h2>
                        <p class="text-neutral-400 leading-relaxed mb-8 font-light">{privacy.body}</p>
                        <div class="space-y-4">
                            {privacy
                                .points
                                .into_iter()
                                .map(|point| {
                                    view! {
                                        <div class="flex items-center gap-3 text-sm text-neutral-300">
                                            <Icon name=point.icon class="w-4 h-4 text-green-500" />
                                            {point.label}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal delay=0.2 class="flex-1 w-full">
                        <div class="bg-gradient-to-br from-neutral-900 to-black p-12 rounded-[3rem] border border-white/10 text-center shadow-2xl flex flex-col items-center">
                            <Icon name=IconName::Shield class="w-16 h-16 text-green-500/20 mx-auto mb-8" />
                            <h4 class="text-xl font-serif text-white mb-4">{privacy.card_title}</h4>
                            <p class="text-neutral-500 text-sm leading-relaxed mb-8">{privacy.card_body}</p>
                            <BuyButton cta=cta />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn PageFooter(brand: String, footer: Footer) -> impl IntoView {
    view! {
        <footer id=SectionId::Footer.anchor() class="py-20 border-t border-white/5 bg-black">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-12 text-center md:text-left">
                    <div>
                        <div class="text-lg font-serif tracking-[0.2em] uppercase italic mb-4">{brand}</div>
                        <p class="text-neutral-600 text-[10px] uppercase tracking-[0.2em]">{footer.copyright}</p>
                    </div>

                    <div class="flex gap-12 text-[10px] uppercase tracking-[0.2em] font-medium text-neutral-500">
                        {footer
                            .links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="hover:text-white transition-colors">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="mt-20 text-center opacity-30 text-[9px] uppercase tracking-[0.3em] font-light max-w-4xl mx-auto leading-loose">
                    {footer.disclaimer}
                </div>
            </div>
        </footer>
    }
}

/// Shown when the embedded content fails validation; still links to checkout
#[component]
fn ContentUnavailable() -> impl IntoView {
    let checkout_url = use_page_config().checkout_url.to_string();

    view! {
        <div class="min-h-screen bg-[#050505] text-neutral-200 flex flex-col items-center justify-center gap-8 p-6">
            <p class="text-lg font-light">"Conteúdo temporariamente indisponível."</p>
            <a href=checkout_url class="bg-white text-black px-8 py-4 rounded-full font-black">
                "QUERO MEU ACESSO AGORA"
            </a>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::config::CheckoutUrl;
    use crate::ui::scroll::provide_scroll_context;
    use leptos::tachys::view::RenderHtml;

    fn render_with(config: Config) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(config);
            provide_scroll_context();
            view! { <LandingPage /> }.to_html()
        })
    }

    fn attribute_values<'a>(html: &'a str, attribute: &str) -> Vec<&'a str> {
        let needle = format!("{attribute}=\"");
        html.match_indices(&needle)
            .filter_map(|(start, _)| {
                let rest = &html[start + needle.len()..];
                rest.find('"').map(|end| &rest[..end])
            })
            .collect()
    }

    #[test]
    fn test_every_checkout_link_is_identical() {
        let config = Config {
            checkout_url: CheckoutUrl::parse("https://checkout.example.com/longer").unwrap(),
        };
        let html = render_with(config);

        let checkout_links: Vec<&str> = attribute_values(&html, "href")
            .into_iter()
            .filter(|href| *href != "#")
            .collect();

        assert_eq!(checkout_links.len(), 3);
        assert!(checkout_links
            .iter()
            .all(|href| *href == "https://checkout.example.com/longer"));
    }

    #[test]
    fn test_default_checkout_url_is_used() {
        let html = render_with(Config::default());
        assert!(html.contains("https://pay.kiwify.com.br/SykVrzJ?afid=1gMqmYXp"));
    }

    #[test]
    fn test_header_starts_transparent() {
        let html = render_with(Config::default());
        assert!(html.contains("data-header-style=\"default\""));
        assert!(html.contains("bg-transparent py-6"));
    }

    #[test]
    fn test_faq_rows_render_collapsed() {
        let html = render_with(Config::default());

        assert!(html.contains("Esse site é seguro?"));
        let expanded = attribute_values(&html, "aria-expanded");
        assert_eq!(expanded.len(), 6);
        assert!(expanded.iter().all(|value| *value == "false"));
    }

    #[test]
    fn test_reveal_wrappers_are_visible_without_scripts() {
        let html = render_with(Config::default());

        let states = attribute_values(&html, "data-reveal");
        assert!(!states.is_empty());
        assert!(states.iter().all(|state| *state == "hidden"));

        // Hiding is left to the stylesheet rule under the root ready class
        assert!(!html.contains("opacity: 0"));
        assert!(!html.contains("translateY(30px)"));
        assert!(html.contains("--reveal-offset: 30px"));
    }

    #[test]
    fn test_reveal_styles_have_single_terminator() {
        let html = render_with(Config::default());
        assert!(!html.contains(";;"));
    }

    #[test]
    fn test_video_frame_is_lazy() {
        let html = render_with(Config::default());
        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("referrerpolicy=\"strict-origin-when-cross-origin\""));
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render_with(Config::default());

        let positions: Vec<usize> = SectionId::ORDER
            .iter()
            .map(|id| {
                html.find(&format!("id=\"{}\"", id.anchor()))
                    .unwrap_or_else(|| panic!("section {id} missing"))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_video_frame_permissions() {
        let html = render_with(Config::default());
        assert!(html.contains("allow=\"autoplay; fullscreen; picture-in-picture\""));
    }
}
