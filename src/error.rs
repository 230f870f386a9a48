//! Error taxonomy for the analysis client and its result utilities.

use thiserror::Error;

/// Everything that can go wrong while submitting, rendering or exporting an
/// analysis. Each variant is handled by the handler that triggered it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Please enter a debate topic")]
    EmptyTopic,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! Status: {status}, Response: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid response format - missing result data")]
    MalformedResponse,

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to copy text: {0}")]
    Clipboard(String),

    #[error("Failed to save results: {0}")]
    Download(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
