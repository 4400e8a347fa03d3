//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SicMatch
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SicMatchError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for SicMatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Catalog(err.to_string())
    }
}

impl From<serde_json::Error> for SicMatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type alias for SicMatch operations
pub type Result<T> = std::result::Result<T, SicMatchError>;
