//! Error types for the source normalizers

use thiserror::Error;

/// Errors that can occur while fetching or normalizing a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Gateway returned a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Failed to parse a response body
    #[error("Parse error: {0}")]
    ParseError(String),
}
