//! Reveal-on-scroll latch
//!
//! A one-way state machine that gates an element's entrance animation on
//! viewport intersection:
//! - `RevealPhase` moves `Hidden -> Revealed` exactly once
//! - `RevealOptions` carries delay, direction and observer margin
//! - `RevealStyle` renders the per-instance offset and timing; the phase is
//!   exposed as an attribute value and the page stylesheet does the hiding
//!
//! The browser wiring lives in `crate::ui::reveal`; everything here is plain
//! data so it can be exercised without a DOM.

use std::fmt;

/// Vertical distance (px) a hidden element is shifted before it enters.
pub const REVEAL_OFFSET_PX: f64 = 30.0;

/// How far before full visibility the observer fires (px).
pub const DEFAULT_ROOT_MARGIN_PX: u32 = 100;

/// Duration of the entrance transition in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 0.8;

/// Easing curve used for the entrance transition.
pub const REVEAL_EASING: CubicBezier = CubicBezier::new(0.21, 0.45, 0.32, 0.9);

/// Direction the element travels while it enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    /// Starts below its resting place and rises.
    #[default]
    Up,
    /// Starts above its resting place and drops.
    Down,
    /// Fades in place.
    None,
}

impl RevealDirection {
    /// Hidden vertical offset in px.
    pub fn hidden_offset(&self) -> f64 {
        match self {
            RevealDirection::Up => REVEAL_OFFSET_PX,
            RevealDirection::Down => -REVEAL_OFFSET_PX,
            RevealDirection::None => 0.0,
        }
    }
}

/// A CSS `cubic-bezier()` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn axis(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn axis_slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Eased progress for a linear time fraction `x` in `[0, 1]`.
    ///
    /// Solves the curve's x polynomial for its parameter with Newton steps,
    /// falling back to bisection when the slope flattens out.
    pub fn sample(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }

        let mut t = x;
        for _ in 0..8 {
            let err = Self::axis(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return Self::axis(self.y1, self.y2, t);
            }
            let slope = Self::axis_slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::axis(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::axis(self.y1, self.y2, t)
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Per-instance reveal configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Delay before the transition starts, in seconds
    pub delay: f64,
    pub direction: RevealDirection,
    /// Negative inset applied to the viewport so the reveal fires early
    pub root_margin_px: u32,
    /// Transition duration in seconds
    pub duration: f64,
    pub easing: CubicBezier,
}

impl RevealOptions {
    pub fn new(delay: f64, direction: RevealDirection) -> Self {
        Self {
            delay: delay.max(0.0),
            direction,
            ..Self::default()
        }
    }

    /// `rootMargin` value handed to the intersection observer.
    pub fn root_margin(&self) -> String {
        if self.root_margin_px == 0 {
            "0px".to_string()
        } else {
            format!("-{}px", self.root_margin_px)
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            delay: 0.0,
            direction: RevealDirection::Up,
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
            duration: DEFAULT_DURATION_SECS,
            easing: REVEAL_EASING,
        }
    }
}

/// Reveal phase, rendered as the wrapper's `data-reveal` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum RevealPhase {
    #[default]
    #[display("hidden")]
    Hidden,
    /// Terminal.
    #[display("revealed")]
    Revealed,
}

/// Outcome of feeding an intersection report into the latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// The latch flipped to `Revealed` on this call; start the animation and
    /// stop observing.
    Triggered,
    /// Nothing changed.
    Ignored,
}

impl RevealTransition {
    pub fn is_triggered(&self) -> bool {
        matches!(self, RevealTransition::Triggered)
    }
}

/// One-way reveal latch
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealLatch {
    phase: RevealPhase,
    options: RevealOptions,
}

impl RevealLatch {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            phase: RevealPhase::Hidden,
            options,
        }
    }

    /// Feed one intersection report.
    ///
    /// Only the first report with `is_intersecting == true` triggers; reports
    /// arriving after the reveal, including the element leaving the viewport,
    /// are ignored.
    pub fn observe(&mut self, is_intersecting: bool) -> RevealTransition {
        match (self.phase, is_intersecting) {
            (RevealPhase::Hidden, true) => {
                self.phase = RevealPhase::Revealed;
                RevealTransition::Triggered
            }
            _ => RevealTransition::Ignored,
        }
    }

    /// Reveal without an intersection report. Used when the observer API is
    /// missing so content never stays invisible.
    pub fn force_reveal(&mut self) -> RevealTransition {
        self.observe(true)
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Inline style of the wrapper; identical in both phases
    pub fn style(&self) -> RevealStyle {
        RevealStyle {
            hidden_offset: self.options.direction.hidden_offset(),
            options: self.options,
        }
    }
}

/// Inline declarations of a reveal wrapper.
///
/// Opacity and transform are left to the stylesheet, which only hides
/// `data-reveal="hidden"` wrappers once scripts are known to run. Markup
/// rendered on the server is therefore visible as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub hidden_offset: f64,
    options: RevealOptions,
}

impl RevealStyle {
    pub fn transition(&self) -> String {
        let RevealOptions {
            delay,
            duration,
            easing,
            ..
        } = self.options;
        format!("opacity {duration}s {easing} {delay}s, transform {duration}s {easing} {delay}s")
    }

    pub fn to_css(&self) -> String {
        format!(
            "--reveal-offset: {}px; transition: {}",
            self.hidden_offset,
            self.transition()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        let latch = RevealLatch::new(RevealOptions::default());
        assert_eq!(latch.phase(), RevealPhase::Hidden);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_non_intersecting_report_is_ignored() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.observe(false), RevealTransition::Ignored);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_first_intersection_triggers_once() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true).is_triggered());
        assert!(!latch.observe(true).is_triggered());
        assert!(!latch.observe(true).is_triggered());
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_scrolling_out_does_not_hide() {
        let mut latch = RevealLatch::default();
        latch.observe(true);

        for visible in [false, true, false, false, true] {
            assert_eq!(latch.observe(visible), RevealTransition::Ignored);
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn test_force_reveal_is_fail_open() {
        let mut latch = RevealLatch::default();
        assert!(latch.force_reveal().is_triggered());
        assert!(latch.is_revealed());
        assert!(!latch.observe(true).is_triggered());
    }

    #[test]
    fn test_hidden_offsets_by_direction() {
        assert_eq!(RevealDirection::Up.hidden_offset(), 30.0);
        assert_eq!(RevealDirection::Down.hidden_offset(), -30.0);
        assert_eq!(RevealDirection::None.hidden_offset(), 0.0);
    }

    #[test]
    fn test_style_carries_offset_and_timing() {
        let latch = RevealLatch::new(RevealOptions::new(0.2, RevealDirection::Down));
        let css = latch.style().to_css();

        assert_eq!(latch.style().hidden_offset, -30.0);
        assert!(css.starts_with("--reveal-offset: -30px;"));
        assert!(css.contains("0.8s cubic-bezier(0.21, 0.45, 0.32, 0.9) 0.2s"));
        assert!(!css.ends_with(';'));
    }

    #[test]
    fn test_style_never_hides_on_its_own() {
        let mut latch = RevealLatch::new(RevealOptions::new(0.4, RevealDirection::Up));
        let before = latch.style();
        latch.observe(true);

        assert_eq!(latch.style(), before);
        assert!(!before.to_css().contains("opacity:"));
        assert!(!before.to_css().contains("translateY"));
    }

    #[test]
    fn test_phase_attribute_values() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.phase().to_string(), "hidden");
        latch.observe(true);
        assert_eq!(latch.phase().to_string(), "revealed");
    }

    #[test]
    fn test_negative_delay_is_clamped() {
        let options = RevealOptions::new(-1.0, RevealDirection::None);
        assert_eq!(options.delay, 0.0);
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(RevealOptions::default().root_margin(), "-100px");

        let options = RevealOptions {
            root_margin_px: 0,
            ..RevealOptions::default()
        };
        assert_eq!(options.root_margin(), "0px");
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(REVEAL_EASING.sample(0.0), 0.0);
        assert_eq!(REVEAL_EASING.sample(1.0), 1.0);
        assert_eq!(REVEAL_EASING.sample(-3.0), 0.0);
        assert_eq!(REVEAL_EASING.sample(7.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotone_and_non_linear() {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = REVEAL_EASING.sample(step as f64 / 20.0);
            assert!(value >= previous - 1e-9, "curve decreased at step {step}");
            previous = value;
        }

        // Front-loaded curve: ahead of linear at the midpoint.
        assert!(REVEAL_EASING.sample(0.5) > 0.55);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let x = step as f64 / 10.0;
            assert!((linear.sample(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_bezier_display() {
        assert_eq!(
            REVEAL_EASING.to_string(),
            "cubic-bezier(0.21, 0.45, 0.32, 0.9)"
        );
    }
}
