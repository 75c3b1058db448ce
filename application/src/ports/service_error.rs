//! Errors reported by the external question and validation services

use thiserror::Error;

/// Transport or server fault talking to an external service
///
/// A wrong placement is *not* a `ServiceError`; the oracle reports that as a
/// verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server returned {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ServiceError {
    /// Whether trying the same request again might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::Connection(_) | ServiceError::Timeout => true,
            ServiceError::Status { status, .. } => *status >= 500,
            ServiceError::NotFound(_) | ServiceError::Decode(_) => false,
        }
    }
}
