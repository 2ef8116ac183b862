//! Processing client error types.

use thiserror::Error;

pub type ProcessingResult<T> = Result<T, ProcessingError>;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid result descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Processing service reported an error: {0}")]
    Failed(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
