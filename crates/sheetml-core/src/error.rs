//! Error types for sheetml-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetml-core
#[derive(Debug, Error)]
pub enum Error {
    /// Area label without exactly one separator between two corners
    #[error("Invalid area: '{0}'")]
    InvalidArea(String),

    /// A collection reference mixed addresses and areas
    #[error("Location kind mismatch: expected {expected}, got {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
