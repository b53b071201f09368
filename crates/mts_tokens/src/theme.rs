//! Theme tree, overrides and light/dark bundles

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::overlay::Overlay;
use crate::tokens::*;
use crate::TokenError;

overlay_struct! {
    /// A complete token tree
    ///
    /// Every category is fully populated; derived themes are produced by
    /// overlaying a [`ThemeOverrides`] onto a base with [`merge_theme`].
    pub struct Theme / PartialTheme {
        pub colors: ColorPalette,
        pub typography: Typography,
        pub spacing: SpacingScale,
        pub shadows: Shadows,
        #[serde(rename = "borderRadius")]
        pub border_radius: BorderRadius,
        #[serde(rename = "zIndex")]
        pub z_index: ZIndex,
        pub breakpoints: Breakpoints,
    }
}

/// Deep-partial theme: any field at any depth may be omitted
pub type ThemeOverrides = PartialTheme;

impl Theme {
    /// Parse a complete theme from TOML
    pub fn from_toml_str(src: &str) -> Result<Self, TokenError> {
        Ok(toml::from_str(src)?)
    }

    /// Parse a complete theme from JSON
    pub fn from_json_str(src: &str) -> Result<Self, TokenError> {
        Ok(serde_json::from_str(src)?)
    }
}

impl PartialTheme {
    /// Parse a partial theme from TOML; unknown keys are rejected
    pub fn from_toml_str(src: &str) -> Result<Self, TokenError> {
        Ok(toml::from_str(src)?)
    }

    /// Parse a partial theme from JSON; unknown keys are rejected
    pub fn from_json_str(src: &str) -> Result<Self, TokenError> {
        Ok(serde_json::from_str(src)?)
    }
}

/// Overlay `overrides` onto a copy of `base`.
///
/// Nested structures are merged field by field; leaves (including lists) in
/// `overrides` replace the base value wholesale. Fields absent from
/// `overrides` are inherited unchanged. `base` is never modified.
pub fn merge_theme(base: &Theme, overrides: &ThemeOverrides) -> Theme {
    base.overlaid(overrides)
}

/// Derive the dark theme from a light base
pub fn dark_theme(light: &Theme, dark_overrides: &ThemeOverrides) -> Theme {
    merge_theme(light, dark_overrides)
}

/// The effective theme after resolving a preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Resolve from a "prefers dark" flag
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A light/dark pair of complete themes
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: String,
    light: Arc<Theme>,
    dark: Arc<Theme>,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: Theme, dark: Theme) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    /// Build a bundle whose dark variant is `light` overlaid with `dark_overrides`
    pub fn from_overrides(
        name: impl Into<String>,
        light: Theme,
        dark_overrides: &ThemeOverrides,
    ) -> Self {
        let name = name.into();
        tracing::debug!("ThemeBundle::from_overrides - deriving dark variant for {}", name);
        let dark = dark_theme(&light, dark_overrides);
        Self::new(name, light, dark)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn light(&self) -> &Theme {
        &self.light
    }

    pub fn dark(&self) -> &Theme {
        &self.dark
    }

    /// Get the theme for a resolved scheme
    pub fn for_resolved(&self, theme: ResolvedTheme) -> &Theme {
        match theme {
            ResolvedTheme::Light => &self.light,
            ResolvedTheme::Dark => &self.dark,
        }
    }

    /// Shared handle to the theme for a resolved scheme
    pub fn shared(&self, theme: ResolvedTheme) -> Arc<Theme> {
        match theme {
            ResolvedTheme::Light => Arc::clone(&self.light),
            ResolvedTheme::Dark => Arc::clone(&self.dark),
        }
    }
}

impl Default for ThemeBundle {
    /// The built-in MTS light theme and its dark derivative
    fn default() -> Self {
        Self::from_overrides("mts", Theme::light(), ThemeOverrides::dark())
    }
}
