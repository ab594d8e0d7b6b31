use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme json is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{0}` is not a valid color")]
    InvalidColor(String),
    #[error("`{0}` is not a valid length")]
    InvalidLength(String),
    #[error("`{0}` is not a valid duration")]
    InvalidDuration(String),
}
