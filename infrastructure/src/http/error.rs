//! Error types for the HTTP game API adapter

use numline_application::ServiceError;
use thiserror::Error;

/// Result type alias for HTTP adapter operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the game services
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {}", detail_or_default(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

fn detail_or_default(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or("no detail")
}

impl From<ApiError> for ServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Request(e) if e.is_timeout() => ServiceError::Timeout,
            ApiError::Request(e) if e.is_decode() => ServiceError::Decode(e.to_string()),
            ApiError::Request(e) => ServiceError::Connection(e.to_string()),
            ApiError::InvalidBaseUrl { url, reason } => {
                ServiceError::Connection(format!("invalid base URL {url:?}: {reason}"))
            }
            ApiError::NotFound(detail) => ServiceError::NotFound(detail),
            ApiError::Status { status, detail } => ServiceError::Status { status, detail },
            ApiError::ParseError { error, .. } => ServiceError::Decode(error),
        }
    }
}
