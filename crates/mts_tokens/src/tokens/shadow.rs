//! Shadow tokens for theming

use crate::color::Color;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

overlay_struct! {
    /// Shadow offset in px
    pub struct ShadowOffset / PartialShadowOffset {
        pub width: f32,
        pub height: f32,
    }
}

overlay_struct! {
    /// Single-layer shadow for native targets that cannot parse CSS
    pub struct NativeShadow / PartialNativeShadow {
        #[serde(rename = "shadowColor")]
        pub color: Color,
        #[serde(rename = "shadowOffset")]
        pub offset: ShadowOffset,
        #[serde(rename = "shadowOpacity")]
        pub opacity: f32,
        #[serde(rename = "shadowRadius")]
        pub radius: f32,
        pub elevation: f32,
    }
}

impl NativeShadow {
    pub const fn new(height: f32, opacity: f32, radius: f32, elevation: f32) -> Self {
        Self {
            color: Color::BLACK,
            offset: ShadowOffset { width: 0.0, height },
            opacity,
            radius,
            elevation,
        }
    }
}

overlay_struct! {
    /// A shadow expressed for both the web (`box-shadow` value) and native targets
    pub struct ShadowDefinition / PartialShadowDefinition {
        pub web: String,
        #[serde(rename = "rn")]
        pub native: NativeShadow,
    }
}

overlay_struct! {
    /// Complete set of shadow tokens
    pub struct Shadows / PartialShadows {
        #[serde(rename = "sm")]
        pub shadow_sm: ShadowDefinition,
        #[serde(rename = "md")]
        pub shadow_md: ShadowDefinition,
        #[serde(rename = "lg")]
        pub shadow_lg: ShadowDefinition,
        #[serde(rename = "xl")]
        pub shadow_xl: ShadowDefinition,
        #[serde(rename = "2xl")]
        pub shadow_2xl: ShadowDefinition,
    }
}

impl Shadows {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &ShadowDefinition {
        match token {
            ShadowToken::Sm => &self.shadow_sm,
            ShadowToken::Md => &self.shadow_md,
            ShadowToken::Lg => &self.shadow_lg,
            ShadowToken::Xl => &self.shadow_xl,
            ShadowToken::Xxl => &self.shadow_2xl,
        }
    }
}

impl Default for Shadows {
    fn default() -> Self {
        let def = |web: &str, native: NativeShadow| ShadowDefinition {
            web: web.to_string(),
            native,
        };
        Self {
            shadow_sm: def(
                "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
                NativeShadow::new(1.0, 0.05, 2.0, 1.0),
            ),
            shadow_md: def(
                "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)",
                NativeShadow::new(4.0, 0.1, 6.0, 3.0),
            ),
            shadow_lg: def(
                "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)",
                NativeShadow::new(10.0, 0.1, 15.0, 6.0),
            ),
            shadow_xl: def(
                "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)",
                NativeShadow::new(20.0, 0.1, 25.0, 12.0),
            ),
            shadow_2xl: def(
                "0 25px 50px -12px rgba(0, 0, 0, 0.25)",
                NativeShadow::new(25.0, 0.25, 50.0, 24.0),
            ),
        }
    }
}
