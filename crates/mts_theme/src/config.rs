use serde::{Deserialize, Serialize};

use crate::{ConfigError, ThemePreference};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "mts-theme";

/// Runtime configuration
///
/// ```toml
/// storage_key = "acme-theme"
/// default_preference = "light"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key the preference is persisted under
    pub storage_key: String,
    /// Preference adopted when nothing valid is stored
    pub default_preference: ThemePreference,
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_default_preference(mut self, preference: ThemePreference) -> Self {
        self.default_preference = preference;
        self
    }

    /// Parse from TOML; missing fields take their defaults
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_preference: ThemePreference::System,
        }
    }
}
