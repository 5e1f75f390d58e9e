//! Error types for the gf-app service layer.

use std::path::PathBuf;

/// Application error type shared by every front-end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load scenario file {path}: {message}")]
    ScenarioLoad { path: PathBuf, message: String },

    #[error("Input rejected: {0}")]
    Validation(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),

    #[error("Unknown gas: {0}")]
    UnknownGas(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for gf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<gf_project::ValidationError> for AppError {
    fn from(err: gf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<gf_stoich::StoichError> for AppError {
    fn from(err: gf_stoich::StoichError) -> Self {
        AppError::Calculation(err.to_string())
    }
}
