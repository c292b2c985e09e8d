//! Session state for the picker
//!
//! Holds the query, the ranked hits and the cursor, and applies one
//! `PickerAction` at a time. The loop in `events` owns the only instance;
//! rendering reads it but never mutates it.

use crate::index::{Entry, EntryIndex, Hit};
use crate::keybinds::PickerAction;
use crate::ui::types::{Mode, PickOutcome};

/// Where the picker is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Typing a query
    #[default]
    Normal,
    /// The cursor was moved since the last query edit
    Navigating,
    /// Terminal: the user picked this entry
    Confirmed(Entry),
    /// Terminal: the user left without a selection
    Cancelled,
}

impl Phase {
    /// Whether the session is over
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed(_) | Self::Cancelled)
    }
}

/// Mutable state of one picker session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current search query
    pub query: String,
    /// Hits for the current query, best first
    pub filtered: Vec<Hit>,
    /// Index into `filtered`; `None` exactly when `filtered` is empty
    pub cursor: Option<usize>,
    /// Current phase
    pub phase: Phase,
    /// How the picker was invoked
    pub mode: Mode,
    /// Number of entries in the index
    pub total: usize,
    /// Wrap around at the ends of the list
    pub wrap: bool,
    /// Rows moved by page up/down
    pub page_size: usize,
}

impl SessionState {
    /// Start a session with `initial_query` already applied
    #[must_use]
    pub fn new(index: &mut EntryIndex, mode: Mode, initial_query: &str) -> Self {
        let mut state = Self {
            query: initial_query.to_string(),
            filtered: Vec::new(),
            cursor: None,
            phase: Phase::Normal,
            mode,
            total: index.len(),
            wrap: false,
            page_size: 10,
        };
        state.refilter(index);
        state
    }

    /// Enable or disable wrap-around navigation
    #[must_use]
    pub const fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the page size used by page up/down
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Apply one action
    ///
    /// Returns `true` when the state changed and needs a redraw. Actions
    /// after the session finished are ignored.
    pub fn apply(&mut self, action: PickerAction, index: &mut EntryIndex) -> bool {
        if self.is_finished() {
            return false;
        }

        if action.is_navigation() {
            return self.navigate(action);
        }
        if action.edits_query() {
            if !self.edit_query(action) {
                return false;
            }
            self.refilter(index);
            return true;
        }

        match action {
            PickerAction::Confirm => {
                let Some(hit) = self.current() else {
                    tracing::debug!(query = %self.query, "confirm with no matches ignored");
                    return false;
                };
                self.phase = Phase::Confirmed(hit.entry.clone());
                true
            }
            PickerAction::Cancel => {
                self.phase = Phase::Cancelled;
                true
            }
            _ => false,
        }
    }

    /// Whether a terminal phase was reached
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Hit under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&Hit> {
        self.cursor.and_then(|i| self.filtered.get(i))
    }

    /// Result of the session so far (`Cancelled` unless confirmed)
    #[must_use]
    pub fn outcome(&self) -> PickOutcome {
        match &self.phase {
            Phase::Confirmed(entry) => PickOutcome::Selected(entry.clone()),
            _ => PickOutcome::Cancelled,
        }
    }

    fn refilter(&mut self, index: &mut EntryIndex) {
        self.filtered = index.filter(&self.query);
        self.cursor = if self.filtered.is_empty() { None } else { Some(0) };
        self.phase = Phase::Normal;
    }

    /// Change the query; `false` when there was nothing to change
    fn edit_query(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::Insert(c) => {
                self.query.push(c);
                true
            }
            PickerAction::Backspace => self.query.pop().is_some(),
            PickerAction::ClearQuery if !self.query.is_empty() => {
                self.query.clear();
                true
            }
            PickerAction::DeleteWord if !self.query.is_empty() => {
                self.delete_word();
                true
            }
            _ => false,
        }
    }

    fn delete_word(&mut self) {
        let trimmed = self.query.trim_end();
        let cut = trimmed.rfind(' ').map_or(0, |i| i + 1);
        self.query.truncate(cut);
    }

    fn navigate(&mut self, action: PickerAction) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let last = self.filtered.len() - 1;

        let next = match action {
            PickerAction::Up if cursor == 0 => {
                if self.wrap {
                    last
                } else {
                    0
                }
            }
            PickerAction::Up => cursor - 1,
            PickerAction::Down if cursor == last => {
                if self.wrap {
                    0
                } else {
                    last
                }
            }
            PickerAction::Down => cursor + 1,
            PickerAction::PageUp => cursor.saturating_sub(self.page_size),
            PickerAction::PageDown => (cursor + self.page_size).min(last),
            PickerAction::First => 0,
            PickerAction::Last => last,
            _ => cursor,
        };

        self.cursor = Some(next);
        let changed = next != cursor || self.phase != Phase::Navigating;
        self.phase = Phase::Navigating;
        changed
    }
}

/// First visible row for a list of `visible` rows keeping `cursor` on screen
///
/// The list scrolls only once the cursor passes the bottom row.
#[must_use]
pub const fn scroll_offset(cursor: Option<usize>, visible: usize) -> usize {
    match cursor {
        Some(cursor) if visible > 0 && cursor >= visible => cursor + 1 - visible,
        _ => 0,
    }
}
