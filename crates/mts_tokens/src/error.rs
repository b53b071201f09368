use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid hex color {0:?}: expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("invalid spacing step {0:?}: expected a non-negative integer")]
    InvalidSpacingStep(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
