//! Event handling for the picker
//!
//! Maps key events to picker actions and runs the synchronous picker loop.

use super::state::SessionState;
use crate::index::EntryIndex;
use crate::keybinds::{KeyChord, KeybindMap, PickerAction};
use crate::ui::error::Result;
use crate::ui::traits::{KeySource, Screen};
use crate::ui::types::{InputEvent, PickOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key event into a picker action
///
/// Configured bindings win; otherwise printable characters edit the query
/// and backspace deletes from it. Key releases are ignored.
#[must_use]
pub fn key_to_action(key: &KeyEvent, binds: &KeybindMap) -> Option<PickerAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if let Some(action) = binds.get(&KeyChord::from(*key)) {
        return Some(*action);
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Some(PickerAction::Insert(c))
        }
        KeyCode::Backspace => Some(PickerAction::Backspace),
        _ => None,
    }
}

/// Run the picker loop until the session reaches a terminal phase
///
/// Draws once up front, then after every event that changed the state.
/// When the key source runs dry the session is cancelled.
///
/// # Errors
///
/// Returns an error if reading input or drawing fails.
pub fn drive<K, S>(
    state: &mut SessionState,
    index: &mut EntryIndex,
    binds: &KeybindMap,
    keys: &mut K,
    screen: &mut S,
) -> Result<PickOutcome>
where
    K: KeySource + ?Sized,
    S: Screen + ?Sized,
{
    screen.draw(state)?;

    while !state.is_finished() {
        let Some(event) = keys.next_event()? else {
            tracing::debug!("input closed, cancelling");
            state.apply(PickerAction::Cancel, index);
            break;
        };

        match event {
            InputEvent::Resize => screen.draw(state)?,
            InputEvent::Key(key) => {
                let Some(action) = key_to_action(&key, binds) else {
                    continue;
                };
                tracing::trace!(?action, "key");
                if state.apply(action, index) && !state.is_finished() {
                    screen.draw(state)?;
                }
            }
        }
    }

    Ok(state.outcome())
}
