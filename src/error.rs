//! Error types for polysay

use std::io;
use thiserror::Error;

/// Main error type for polysay
#[derive(Error, Debug)]
pub enum SayError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Voice catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for polysay operations
pub type Result<T> = std::result::Result<T, SayError>;

impl From<String> for SayError {
    fn from(s: String) -> Self {
        SayError::Other(s)
    }
}

impl From<&str> for SayError {
    fn from(s: &str) -> Self {
        SayError::Other(s.to_string())
    }
}
