use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while handing a selection to the host multiplexer
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Not inside tmux, tmux missing, or tmux refused the command
    #[error("No tmux session to hand the selection to: {reason}")]
    NoHostSession { reason: String },

    /// The selected directory does not exist
    #[error("Selected directory does not exist: {}", path.display())]
    PathMissing { path: PathBuf },

    #[error("Failed to write selection: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    pub(crate) fn no_host(reason: impl Into<String>) -> Self {
        Self::NoHostSession {
            reason: reason.into(),
        }
    }
}
