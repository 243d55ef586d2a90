//! Static page content
//!
//! All copy, image references and the video embed live in
//! `content/page.json`, compiled into the binary and parsed into
//! `PageContent`. Nothing here is mutated at runtime.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::core::icon::IconName;

const EMBEDDED_CONTENT: &str = include_str!("../../content/page.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("page content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("section `{0}` has no title")]
    UntitledSection(SectionId),

    #[error("section `{0}` has no entries")]
    EmptySection(SectionId),

    #[error("duplicate FAQ id `{0}`")]
    DuplicateFaqId(String),
}

/// Page sections, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Urgency,
    Specialists,
    Access,
    Video,
    Offer,
    Benefits,
    Faq,
    Privacy,
    Footer,
}

impl SectionId {
    pub const ORDER: [SectionId; 10] = [
        SectionId::Hero,
        SectionId::Urgency,
        SectionId::Specialists,
        SectionId::Access,
        SectionId::Video,
        SectionId::Offer,
        SectionId::Benefits,
        SectionId::Faq,
        SectionId::Privacy,
        SectionId::Footer,
    ];

    /// DOM id of the section element
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Urgency => "urgencia",
            SectionId::Specialists => "especialistas",
            SectionId::Access => "conteudo",
            SectionId::Video => "video",
            SectionId::Offer => "oferta",
            SectionId::Benefits => "beneficios",
            SectionId::Faq => "duvidas",
            SectionId::Privacy => "privacidade",
            SectionId::Footer => "rodape",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Descriptive summary of one section
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSection<'a> {
    pub id: SectionId,
    pub title: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallToAction {
    pub label: String,
    /// Social-proof line under the button
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Urgency {
    pub headline: String,
    pub quote: String,
    pub decision: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Specialist {
    pub name: String,
    pub image_url: String,
    pub quotes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Specialists {
    pub eyebrow: String,
    pub title: String,
    pub people: Vec<Specialist>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessLevel {
    pub title: String,
    pub items: Vec<String>,
    /// Text color class of the level title
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Access {
    pub eyebrow: String,
    pub title: String,
    pub levels: Vec<AccessLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoEmbed {
    pub src: String,
    pub title: String,
    /// Permissions policy of the player frame
    pub allow: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offer {
    pub title: String,
    pub original_price: String,
    pub price: String,
    pub installments_prefix: String,
    pub installment_price: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Benefit {
    pub icon: IconName,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Faq {
    pub title: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrivacyPoint {
    pub icon: IconName,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Privacy {
    pub title: String,
    pub body: String,
    pub points: Vec<PrivacyPoint>,
    pub card_title: String,
    pub card_body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub copyright: String,
    pub links: Vec<FooterLink>,
    pub disclaimer: String,
}

/// Everything the landing page renders
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub brand: String,
    /// Launch-offer badge shown in the header
    pub announcement: String,
    pub cta: CallToAction,
    pub hero: Hero,
    pub urgency: Urgency,
    pub specialists: Specialists,
    pub access: Access,
    pub video: VideoEmbed,
    pub offer: Offer,
    pub benefits: Vec<Benefit>,
    pub faq: Faq,
    pub privacy: Privacy,
    pub footer: Footer,
}

impl PageContent {
    /// Content compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: PageContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let empty = [
            (SectionId::Specialists, self.specialists.people.is_empty()),
            (SectionId::Access, self.access.levels.is_empty()),
            (SectionId::Benefits, self.benefits.is_empty()),
            (SectionId::Faq, self.faq.entries.is_empty()),
        ];
        if let Some((id, _)) = empty.into_iter().find(|(_, is_empty)| *is_empty) {
            return Err(ContentError::EmptySection(id));
        }

        for section in self.sections() {
            if section.title.trim().is_empty() {
                return Err(ContentError::UntitledSection(section.id));
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.faq.entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(ContentError::DuplicateFaqId(entry.id.clone()));
            }
        }

        Ok(())
    }

    /// Sections in render order
    pub fn sections(&self) -> Vec<ContentSection<'_>> {
        SectionId::ORDER
            .iter()
            .map(|&id| {
                let title = match id {
                    SectionId::Hero => self.hero.title.as_str(),
                    SectionId::Urgency => self.urgency.headline.as_str(),
                    SectionId::Specialists => self.specialists.title.as_str(),
                    SectionId::Access => self.access.title.as_str(),
                    SectionId::Video => self.video.title.as_str(),
                    SectionId::Offer => self.offer.title.as_str(),
                    SectionId::Benefits => self.benefits.first().map_or("", |b| b.title.as_str()),
                    SectionId::Faq => self.faq.title.as_str(),
                    SectionId::Privacy => self.privacy.title.as_str(),
                    SectionId::Footer => self.brand.as_str(),
                };
                ContentSection { id, title }
            })
            .collect()
    }

    pub fn faq_entry(&self, question: &str) -> Option<&FaqEntry> {
        self.faq.entries.iter().find(|e| e.question == question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = PageContent::embedded().unwrap();
        assert_eq!(content.brand, "The Longer Method");
        assert_eq!(content.specialists.people.len(), 2);
        assert_eq!(content.access.levels.len(), 4);
        assert_eq!(content.benefits.len(), 3);
        assert_eq!(content.faq.entries.len(), 6);
        assert_eq!(content.privacy.points.len(), 3);
    }

    #[test]
    fn test_sections_follow_render_order() {
        let content = PageContent::embedded().unwrap();
        let sections = content.sections();

        assert_eq!(sections.len(), SectionId::ORDER.len());
        for (position, section) in sections.iter().enumerate() {
            assert_eq!(section.id, SectionId::ORDER[position]);
            assert!(!section.title.is_empty());
        }
        assert_eq!(sections[0].id, SectionId::Hero);
        assert_eq!(sections.last().unwrap().id, SectionId::Footer);
    }

    #[test]
    fn test_video_section_references_player() {
        let content = PageContent::embedded().unwrap();

        assert!(content.video.src.starts_with("https://player.vimeo.com/"));
        assert_eq!(content.video.allow, "autoplay; fullscreen; picture-in-picture");
    }

    #[test]
    fn test_faq_lookup() {
        let content = PageContent::embedded().unwrap();
        let entry = content.faq_entry("Esse site é seguro?").unwrap();
        assert!(entry.answer.starts_with("Sim, utilizamos protocolos"));
        assert!(content.faq_entry("Qual é a cor do céu?").is_none());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = PageContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_duplicate_faq_id_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value["faq"]["entries"][1]["id"] = value["faq"]["entries"][0]["id"].clone();

        let err = PageContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateFaqId(id) if id == "faq-o-que-e"));
    }

    #[test]
    fn test_empty_faq_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value["faq"]["entries"] = serde_json::json!([]);

        let err = PageContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptySection(SectionId::Faq)));
        assert_eq!(err.to_string(), "section `duvidas` has no entries");
    }

    #[test]
    fn test_untitled_section_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value["offer"]["title"] = serde_json::json!("  ");

        let err = PageContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::UntitledSection(SectionId::Offer)));
    }

    #[test]
    fn test_unknown_icon_is_a_parse_error() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value["benefits"][0]["icon"] = serde_json::json!("rocket");

        assert!(matches!(
            PageContent::from_json(&value.to_string()),
            Err(ContentError::Parse(_))
        ));
    }
}
