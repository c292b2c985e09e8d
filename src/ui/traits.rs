//! Core traits for UI abstraction layer
//!
//! The picker loop only talks to a `KeySource` and a `Screen`, so it runs the
//! same against a real terminal and against a scripted key sequence.

use super::error::Result;
use super::ratatui_adapter::SessionState;
use super::types::{InputEvent, Mode, PickOutcome};
use crate::index::EntryIndex;

/// Source of input events for the picker loop
pub trait KeySource {
    /// Block until the next event
    ///
    /// Returns `Ok(None)` when no more input will arrive; the picker treats
    /// that as a cancellation.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Something the picker can render its state onto
pub trait Screen {
    /// Draw the full UI for `state`
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn draw(&mut self, state: &SessionState) -> Result<()>;
}

/// Trait for interactive picker implementations
pub trait Picker {
    /// Let the user pick one entry from `index`
    ///
    /// # Errors
    ///
    /// Returns an error if the picker cannot be initialized (e.g.
    /// `UiError::TerminalUnavailable`) or if input/output fails.
    fn pick(&mut self, index: &mut EntryIndex, mode: Mode, query: &str) -> Result<PickOutcome>;
}
