//! Error types for ATOM.

use thiserror::Error;

/// Common error type for ATOM.
#[derive(Error, Debug)]
pub enum AtomError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found. Carries the full user-facing message.
    #[error("{0}")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for AtomError {
    fn from(e: sqlx::Error) -> Self {
        AtomError::Database(e.to_string())
    }
}

/// Result type alias for ATOM operations.
pub type Result<T> = std::result::Result<T, AtomError>;
