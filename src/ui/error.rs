//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The terminal could not be put into raw/interactive mode
    #[error("Terminal unavailable: {0}")]
    TerminalUnavailable(String),

    /// IO error while reading keys or drawing
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
