//! Error types shared across FlightFrame crates.

use std::path::PathBuf;

/// Top-level error type for FlightFrame operations.
#[derive(Debug, thiserror::Error)]
pub enum FlightframeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FlightframeError.
pub type FlightframeResult<T> = Result<T, FlightframeError>;

impl FlightframeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
