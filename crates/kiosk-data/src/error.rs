//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS
    /// failure, invalid URL, ...).
    #[error("Request failed: {0}")]
    Request(String),

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
