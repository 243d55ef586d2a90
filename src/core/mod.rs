//! Page state machines and static content, independent of the renderer

pub mod config;
pub mod content;
pub mod cta;
pub mod disclosure;
pub mod icon;
pub mod reveal;
pub mod scroll;
#[cfg(test)]
mod tests;

pub use config::{CheckoutUrl, Config, ConfigError};
pub use content::{ContentError, ContentSection, FaqEntry, PageContent, SectionId};
pub use cta::CtaSkin;
pub use disclosure::{Disclosure, DisclosurePhase};
pub use icon::IconName;
pub use reveal::{RevealDirection, RevealLatch, RevealOptions, RevealPhase, RevealTransition};
pub use scroll::{HeaderStyle, ScrollTracker};
