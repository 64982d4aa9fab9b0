//! Error types for tag-cloud

use std::io;

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CloudError>;

#[derive(Error, Debug)]
pub enum CloudError {
    /// The input stream could not be read to the end
    #[error("failed to read input: {0}")]
    InputRead(#[source] io::Error),

    /// The output sink rejected a write or flush
    #[error("failed to write output: {0}")]
    OutputWrite(#[source] io::Error),

    /// Requested cloud size is negative or larger than the vocabulary
    #[error("invalid word count {requested}: expected a value between 0 and {available}")]
    InvalidCount { requested: i64, available: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// Prompt input ended before a valid answer was given
    #[error("input closed before a valid answer was entered")]
    PromptClosed,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CloudError {
    pub fn invalid_count(requested: impl TryInto<i64>, available: usize) -> Self {
        Self::InvalidCount {
            requested: requested.try_into().unwrap_or(i64::MAX),
            available,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
