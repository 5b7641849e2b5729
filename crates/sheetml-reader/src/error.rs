//! Reader error types

use thiserror::Error;

/// Result type for read operations
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Errors that can occur while reading a SpreadsheetML document
#[derive(Debug, Error)]
pub enum ReadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error reported by the parser
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Markup that parses but cannot be read (unknown prefix, bad text, truncation)
    #[error("Malformed document: {0}")]
    Markup(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetml_core::Error),

    /// A listener asked to abort the read
    #[error("Listener error: {0}")]
    Listener(String),
}

impl ReadError {
    /// Create a listener error with a message
    pub fn listener<S: Into<String>>(msg: S) -> Self {
        ReadError::Listener(msg.into())
    }
}
