use std::fmt;
use std::str::FromStr;

use mts_tokens::ResolvedTheme;
use serde::{Deserialize, Serialize};

use crate::ParsePreferenceError;

/// What the user asked for; `System` follows the OS dark-mode setting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::System,
        ThemePreference::Light,
        ThemePreference::Dark,
    ];

    /// Persisted form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Exact, case-sensitive match against the persisted form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_system(self) -> bool {
        self == Self::System
    }

    /// Resolve against the current system setting
    pub fn resolve(self, system_prefers_dark: impl FnOnce() -> bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::from_dark(system_prefers_dark()),
        }
    }
}

impl From<ResolvedTheme> for ThemePreference {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::Light,
            ResolvedTheme::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParsePreferenceError(s.to_string()))
    }
}
