//! Common types for UI abstraction layer

use crate::index::Entry;
use crossterm::event::KeyEvent;
use std::fmt;

/// How the picker was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Run from a shell; the selection is printed
    #[default]
    Normal,
    /// Run inside a tmux popup; the selection is handed to tmux
    TmuxPopup,
}

impl Mode {
    /// Convert to string representation for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::TmuxPopup => "tmux-popup",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input delivered to the picker loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press
    Key(KeyEvent),
    /// The terminal was resized; redraw without changing state
    Resize,
}

/// Result of one picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user confirmed this entry
    Selected(Entry),
    /// The user cancelled (or input ended)
    Cancelled,
}

impl PickOutcome {
    /// Selected entry, if any
    #[must_use]
    pub const fn selected(&self) -> Option<&Entry> {
        match self {
            Self::Selected(entry) => Some(entry),
            Self::Cancelled => None,
        }
    }
}
