use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid theme preference {0:?}: expected \"system\", \"light\" or \"dark\"")]
pub struct ParsePreferenceError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference store {} is not valid TOML: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Encode(#[from] toml::ser::Error),
}
