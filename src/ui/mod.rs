pub mod config;
pub mod cta;
pub mod disclosure;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod scroll;

pub use config::{provide_page_config, use_page_config};
pub use cta::BuyButton;
pub use disclosure::FaqItem;
pub use icon::Icon;
pub use reveal::Reveal;
pub use scroll::{ScrollContext, provide_scroll_context, use_scroll_context};
