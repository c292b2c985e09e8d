//! Multiplexer bridge
//!
//! Hands the selected directory to whoever invoked the picker: printed on
//! stdout in plain mode, passed to tmux in popup mode. When tmux cannot be
//! reached the path is printed instead.

mod error;
pub mod tmux;

pub use error::BridgeError;
pub use tmux::Tmux;

use crate::index::Entry;
use crate::ui::Mode;
use std::io::Write;
use std::path::Path;

/// What the host multiplexer is asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchRequest<'a> {
    /// Directory to switch to
    pub path: &'a Path,
    /// Entry label, used for window names
    pub label: &'a str,
}

impl<'a> SwitchRequest<'a> {
    #[must_use]
    pub fn for_entry(entry: &'a Entry) -> Self {
        Self {
            path: &entry.path,
            label: &entry.label,
        }
    }
}

/// A host session that can be pointed at a directory
pub trait Multiplexer {
    /// Issue a single switch command
    ///
    /// # Errors
    ///
    /// `BridgeError::NoHostSession` when the host cannot be reached (the
    /// caller degrades to printing), `BridgeError::PathMissing` when the
    /// directory is gone.
    fn switch_to(&self, request: &SwitchRequest<'_>) -> Result<(), BridgeError>;
}

/// How a selection was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Plain mode: the path was printed
    Printed,
    /// Popup mode: the host session was switched
    Switched,
    /// Popup mode without a reachable host: the path was printed
    Degraded,
}

/// Deliver a confirmed selection
///
/// # Errors
///
/// Returns `BridgeError::PathMissing` in popup mode when the directory does
/// not exist, or an IO error if writing to `out` fails.
pub fn apply_selection(
    entry: &Entry,
    mode: Mode,
    mux: &dyn Multiplexer,
    out: &mut dyn Write,
) -> Result<Applied, BridgeError> {
    match mode {
        Mode::Normal => {
            print_path(&entry.path, out)?;
            Ok(Applied::Printed)
        }
        Mode::TmuxPopup => match mux.switch_to(&SwitchRequest::for_entry(entry)) {
            Ok(()) => {
                tracing::info!(path = %entry.path.display(), "switched tmux to selection");
                Ok(Applied::Switched)
            }
            Err(BridgeError::NoHostSession { reason }) => {
                tracing::warn!(%reason, "no tmux session, printing path instead");
                print_path(&entry.path, out)?;
                Ok(Applied::Degraded)
            }
            Err(e) => Err(e),
        },
    }
}

fn print_path(path: &Path, out: &mut dyn Write) -> Result<(), BridgeError> {
    writeln!(out, "{}", path.display())?;
    out.flush()?;
    Ok(())
}
