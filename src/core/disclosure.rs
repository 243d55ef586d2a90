//! Disclosure (collapsible row) state
//!
//! Every FAQ row owns one `Disclosure`. Instances never share state: opening
//! one row leaves the others as they were.

use crate::core::icon::IconName;

/// Disclosure phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclosurePhase {
    #[default]
    Collapsed,
    Open,
}

impl DisclosurePhase {
    pub fn flipped(self) -> Self {
        match self {
            DisclosurePhase::Collapsed => DisclosurePhase::Open,
            DisclosurePhase::Open => DisclosurePhase::Collapsed,
        }
    }
}

/// Collapsed/open toggle bound to one question/answer pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    id: String,
    phase: DisclosurePhase,
}

impl Disclosure {
    /// Create a collapsed disclosure
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phase: DisclosurePhase::Collapsed,
        }
    }

    /// Flip the state and return the new phase
    pub fn toggle(&mut self) -> DisclosurePhase {
        self.phase = self.phase.flipped();
        self.phase
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> DisclosurePhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DisclosurePhase::Open
    }

    /// DOM id of the answer panel, referenced by `aria-controls`
    pub fn panel_id(&self) -> String {
        format!("{}-answer", self.id)
    }

    /// Icon shown next to the question
    pub fn indicator(&self) -> IconName {
        match self.phase {
            DisclosurePhase::Collapsed => IconName::Plus,
            DisclosurePhase::Open => IconName::Minus,
        }
    }

    pub fn indicator_class(&self) -> &'static str {
        match self.phase {
            DisclosurePhase::Collapsed => "w-5 h-5 text-neutral-600",
            DisclosurePhase::Open => "w-5 h-5 text-green-500",
        }
    }

    /// Answer panel classes. Height and opacity transition together so the
    /// collapse plays the expansion backwards.
    pub fn panel_class(&self) -> &'static str {
        match self.phase {
            DisclosurePhase::Collapsed => {
                "overflow-hidden transition-all duration-300 ease-in-out max-h-0 opacity-0"
            }
            DisclosurePhase::Open => {
                "overflow-hidden transition-all duration-300 ease-in-out max-h-96 opacity-100"
            }
        }
    }
}
