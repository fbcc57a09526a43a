//! Error types for meetgrid.

use thiserror::Error;

/// Errors that can occur in meetgrid operations.
#[derive(Error, Debug)]
pub enum MeetgridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid schedule format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for meetgrid operations.
pub type MeetgridResult<T> = Result<T, MeetgridError>;
