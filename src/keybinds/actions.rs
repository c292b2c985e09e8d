//! Actions the picker can perform in response to a key.

/// Everything a key press can ask the picker to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerAction {
    /// Append a character to the query (built-in for printable keys)
    Insert(char),
    /// Delete the character before the query cursor (built-in)
    Backspace,
    /// Clear the whole query - Ctrl+U
    ClearQuery,
    /// Delete the previous word of the query - Ctrl+W
    DeleteWord,

    /// Move the cursor up one row
    Up,
    /// Move the cursor down one row
    Down,
    /// Move the cursor up one page
    PageUp,
    /// Move the cursor down one page
    PageDown,
    /// Jump to the first row
    First,
    /// Jump to the last row
    Last,

    /// Select the entry under the cursor
    Confirm,
    /// Leave without a selection
    Cancel,
}

impl PickerAction {
    /// Actions that can be rebound from the `[keybinds]` table, with their config names.
    pub const BINDABLE: [(&'static str, Self); 10] = [
        ("confirm", Self::Confirm),
        ("cancel", Self::Cancel),
        ("up", Self::Up),
        ("down", Self::Down),
        ("page_up", Self::PageUp),
        ("page_down", Self::PageDown),
        ("first", Self::First),
        ("last", Self::Last),
        ("clear_query", Self::ClearQuery),
        ("delete_word", Self::DeleteWord),
    ];

    /// Look up a bindable action by its config name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::BINDABLE
            .iter()
            .find(|(id, _)| *id == name)
            .map(|(_, action)| *action)
    }

    /// Config name of a bindable action (`None` for built-ins).
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        Self::BINDABLE
            .iter()
            .find(|(_, action)| *action == self)
            .map(|(id, _)| *id)
    }

    /// Returns whether this action edits the query and so requires re-filtering.
    #[must_use]
    pub const fn edits_query(self) -> bool {
        matches!(
            self,
            Self::Insert(_) | Self::Backspace | Self::ClearQuery | Self::DeleteWord
        )
    }

    /// Returns whether this action moves the cursor.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::Up | Self::Down | Self::PageUp | Self::PageDown | Self::First | Self::Last
        )
    }
}
