//! Border radius tokens for theming

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Full,
}

overlay_struct! {
    /// Complete set of border radius tokens (px)
    pub struct BorderRadius / PartialBorderRadius {
        #[serde(rename = "none")]
        pub radius_none: f32,
        #[serde(rename = "sm")]
        pub radius_sm: f32,
        #[serde(rename = "DEFAULT")]
        pub radius_default: f32,
        #[serde(rename = "md")]
        pub radius_md: f32,
        #[serde(rename = "lg")]
        pub radius_lg: f32,
        #[serde(rename = "xl")]
        pub radius_xl: f32,
        #[serde(rename = "2xl")]
        pub radius_2xl: f32,
        #[serde(rename = "3xl")]
        pub radius_3xl: f32,
        #[serde(rename = "full")]
        pub radius_full: f32,
    }
}

impl BorderRadius {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.radius_none,
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Default => self.radius_default,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Xxl => self.radius_2xl,
            RadiusToken::Xxxl => self.radius_3xl,
            RadiusToken::Full => self.radius_full,
        }
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            radius_none: 0.0,
            radius_sm: 2.0,
            radius_default: 4.0,
            radius_md: 6.0,
            radius_lg: 8.0,
            radius_xl: 12.0,
            radius_2xl: 16.0,
            radius_3xl: 24.0,
            radius_full: 9999.0,
        }
    }
}
