//! Scroll position derivations
//!
//! The header style and the hero parallax shift are both pure functions of
//! the current scroll position. Nothing here depends on how many scroll
//! events fired before.

/// Offset (px) past which the header switches to its scrolled style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Hero background shift (percent of its height) at the bottom of the page.
pub const PARALLAX_MAX_SHIFT_PERCENT: f64 = 15.0;

/// Header visual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum HeaderStyle {
    /// Transparent, tall padding
    #[default]
    #[display("default")]
    Default,
    /// Translucent, blurred, bordered, compact padding
    #[display("scrolled")]
    Scrolled,
}

impl HeaderStyle {
    /// Derive the style for a vertical offset.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Default
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            HeaderStyle::Default => {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-700 bg-transparent py-6"
            }
            HeaderStyle::Scrolled => {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-700 bg-[#050505]/95 backdrop-blur-xl py-3 border-b border-white/5"
            }
        }
    }
}

/// Tracks the header style across scroll updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    style: HeaderStyle,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::with_threshold(HEADER_SCROLL_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            style: HeaderStyle::Default,
        }
    }

    /// Feed the current offset.
    ///
    /// Returns the new style when it differs from the previous one, `None`
    /// when the header does not need to redraw.
    pub fn update(&mut self, offset: f64) -> Option<HeaderStyle> {
        let next = HeaderStyle::for_offset(offset, self.threshold);
        if next == self.style {
            return None;
        }
        self.style = next;
        Some(next)
    }

    pub fn style(&self) -> HeaderStyle {
        self.style
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of the scrollable distance covered, in `[0, 1]`.
///
/// Pages shorter than the viewport have nothing to scroll and report `0`.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Hero background shift for a scroll progress value.
pub fn parallax_shift_percent(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * PARALLAX_MAX_SHIFT_PERCENT
}
