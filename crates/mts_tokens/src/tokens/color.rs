//! Color tokens for theming

use crate::color::Color;

/// Semantic color scale keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Brand colors
    Primary,
    Secondary,

    // Semantic colors
    Success,
    Warning,
    Danger,
    Info,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Danger,
        ColorRole::Info,
    ];

    /// Key used in token files
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

/// Shade keys within a [`ColorScale`], lightest (50) to darkest (900) in the light theme
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S500,
    S600,
    S700,
    S900,
}

impl Shade {
    pub const ALL: [Shade; 8] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S900,
    ];

    pub fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S900 => 900,
        }
    }
}

overlay_struct! {
    /// A single color ramp
    pub struct ColorScale / PartialColorScale {
        #[serde(rename = "50")]
        pub shade_50: Color,
        #[serde(rename = "100")]
        pub shade_100: Color,
        #[serde(rename = "200")]
        pub shade_200: Color,
        #[serde(rename = "300")]
        pub shade_300: Color,
        #[serde(rename = "500")]
        pub shade_500: Color,
        #[serde(rename = "600")]
        pub shade_600: Color,
        #[serde(rename = "700")]
        pub shade_700: Color,
        #[serde(rename = "900")]
        pub shade_900: Color,
    }
}

impl ColorScale {
    /// Build a scale from shades ordered 50 through 900
    pub const fn from_hex(shades: [u32; 8]) -> Self {
        Self {
            shade_50: Color::from_hex(shades[0]),
            shade_100: Color::from_hex(shades[1]),
            shade_200: Color::from_hex(shades[2]),
            shade_300: Color::from_hex(shades[3]),
            shade_500: Color::from_hex(shades[4]),
            shade_600: Color::from_hex(shades[5]),
            shade_700: Color::from_hex(shades[6]),
            shade_900: Color::from_hex(shades[7]),
        }
    }

    /// Get a color by shade key
    pub fn get(&self, shade: Shade) -> Color {
        match shade {
            Shade::S50 => self.shade_50,
            Shade::S100 => self.shade_100,
            Shade::S200 => self.shade_200,
            Shade::S300 => self.shade_300,
            Shade::S500 => self.shade_500,
            Shade::S600 => self.shade_600,
            Shade::S700 => self.shade_700,
            Shade::S900 => self.shade_900,
        }
    }

    /// The same shades in the opposite order (50 <-> 900, 100 <-> 700, ...)
    pub fn inverted(&self) -> Self {
        Self {
            shade_50: self.shade_900,
            shade_100: self.shade_700,
            shade_200: self.shade_600,
            shade_300: self.shade_500,
            shade_500: self.shade_300,
            shade_600: self.shade_200,
            shade_700: self.shade_100,
            shade_900: self.shade_50,
        }
    }
}

impl PartialColorScale {
    /// Partial that sets every shade of `scale`
    pub fn full(scale: &ColorScale) -> Self {
        Self {
            shade_50: Some(scale.shade_50),
            shade_100: Some(scale.shade_100),
            shade_200: Some(scale.shade_200),
            shade_300: Some(scale.shade_300),
            shade_500: Some(scale.shade_500),
            shade_600: Some(scale.shade_600),
            shade_700: Some(scale.shade_700),
            shade_900: Some(scale.shade_900),
        }
    }
}

overlay_struct! {
    /// Complete set of semantic color scales
    pub struct ColorPalette / PartialColorPalette {
        pub primary: ColorScale,
        pub secondary: ColorScale,
        pub success: ColorScale,
        pub warning: ColorScale,
        pub danger: ColorScale,
        pub info: ColorScale,
    }
}

impl ColorPalette {
    /// Get a color scale by role
    pub fn get(&self, role: ColorRole) -> &ColorScale {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Danger => &self.danger,
            ColorRole::Info => &self.info,
        }
    }

    /// Shorthand for `self.get(role).get(shade)`
    pub fn shade(&self, role: ColorRole, shade: Shade) -> Color {
        self.get(role).get(shade)
    }
}
