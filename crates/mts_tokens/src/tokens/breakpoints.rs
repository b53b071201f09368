//! Responsive breakpoints

overlay_struct! {
    /// Minimum viewport widths in px
    pub struct Breakpoints / PartialBreakpoints {
        #[serde(rename = "sm")]
        pub screen_sm: u32,
        #[serde(rename = "md")]
        pub screen_md: u32,
        #[serde(rename = "lg")]
        pub screen_lg: u32,
        #[serde(rename = "xl")]
        pub screen_xl: u32,
        #[serde(rename = "2xl")]
        pub screen_2xl: u32,
    }
}

impl Breakpoints {
    /// Name of the largest breakpoint at or below `width`, if any
    pub fn active(&self, width: u32) -> Option<&'static str> {
        [
            ("2xl", self.screen_2xl),
            ("xl", self.screen_xl),
            ("lg", self.screen_lg),
            ("md", self.screen_md),
            ("sm", self.screen_sm),
        ]
        .into_iter()
        .find(|&(_, min)| width >= min)
        .map(|(name, _)| name)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            screen_sm: 640,
            screen_md: 768,
            screen_lg: 1024,
            screen_xl: 1280,
            screen_2xl: 1536,
        }
    }
}
