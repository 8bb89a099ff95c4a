//! Startup and configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required element is absent from the page; the prompt cannot run without it
    #[error("missing element: {0}")]
    MissingElement(String),

    /// Tuning overrides were present but not valid JSON for [`crate::Tuning`]
    #[error("invalid tuning overrides: {0}")]
    InvalidTuning(#[from] serde_json::Error),
}
