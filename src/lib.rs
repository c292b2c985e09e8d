//! tmux-quickselect - an interactive directory selector for tmux
//!
//! This library loads a list of directories from a per-user config file,
//! merges them with live-scanned subdirectories, lets the user narrow them
//! down in a fuzzy finder and hands the chosen directory to tmux (or prints it).
//!
//! ```text
//! config ──▶ index ──▶ ui (picker) ──▶ bridge
//! ```

use thiserror::Error;

pub mod bridge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod index;
pub mod keybinds;
pub mod ui;

/// Exit code for a confirmed selection or a successful command
pub const EXIT_OK: u8 = 0;
/// Exit code when the user cancelled the picker
pub const EXIT_CANCELLED: u8 = 1;
/// Exit code for fatal configuration, terminal or bridge errors
pub const EXIT_FATAL: u8 = 2;

/// Error enum, contains all fatal failure states of the program
#[derive(Debug, Error)]
pub enum QsError {
    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    /// The interactive picker could not run
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// The selection could not be handed to the multiplexer
    #[error("Multiplexer error: {0}")]
    Bridge(#[from] bridge::BridgeError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Output serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QsError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        EXIT_FATAL
    }
}

/// Result alias used across the crate's top-level operations
pub type Result<T> = std::result::Result<T, QsError>;
