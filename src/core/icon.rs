//! Icon set used by the page
//!
//! Outline icons on a 24x24 grid, stroked with `currentColor`. Each icon is a
//! list of SVG path strings so the renderer only needs `<path>` elements.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Activity,
    AlertCircle,
    ArrowRight,
    CheckCircle,
    EyeOff,
    Lock,
    Minus,
    Plus,
    Shield,
    ShieldCheck,
    Target,
    Users,
    Zap,
}

const SHIELD: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z";
const CHECK: &str = "m9 12 2 2 4-4";
const CIRCLE: &str = "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0";

impl IconName {
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconName::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            IconName::AlertCircle => &[CIRCLE, "M12 8v4", "M12 16h.01"],
            IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconName::CheckCircle => &[CIRCLE, CHECK],
            IconName::EyeOff => &[
                "M9.88 9.88a3 3 0 1 0 4.24 4.24",
                "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
                "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
                "m2 2 20 20",
            ],
            IconName::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            IconName::Minus => &["M5 12h14"],
            IconName::Plus => &["M5 12h14", "M12 5v14"],
            IconName::Shield => &[SHIELD],
            IconName::ShieldCheck => &[SHIELD, CHECK],
            IconName::Target => &[
                CIRCLE,
                "M18 12a6 6 0 1 1-12 0a6 6 0 1 1 12 0",
                "M14 12a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
            ],
            IconName::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0a4 4 0 1 1 8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconName::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}
