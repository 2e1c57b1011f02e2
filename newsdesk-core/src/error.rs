//! Error types shared across the newsdesk workspace

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NewsdeskError {
    pub fn network(msg: impl Into<String>) -> Self {
        NewsdeskError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        NewsdeskError::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        NewsdeskError::Config(msg.into())
    }
}

/// Result type alias for newsdesk operations
pub type NewsdeskResult<T> = Result<T, NewsdeskError>;
