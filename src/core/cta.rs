//! Call-to-action skins

/// Visual skin of the purchase button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CtaSkin {
    /// White button on dark sections
    #[default]
    Default,
    /// Black button on light sections
    Inverted,
}

impl CtaSkin {
    pub fn button_class(&self) -> &'static str {
        match self {
            CtaSkin::Default => {
                "group relative bg-white text-black w-full py-6 rounded-full font-black text-xl transition-all hover:scale-[1.02] active:scale-[0.98] shadow-[0_0_50px_rgba(255,255,255,0.1)] flex items-center justify-center"
            }
            CtaSkin::Inverted => {
                "group relative bg-black text-white w-full py-6 rounded-full font-black text-xl transition-all hover:scale-[1.02] active:scale-[0.98] shadow-[0_0_50px_rgba(0,0,0,0.15)] flex items-center justify-center"
            }
        }
    }
}
