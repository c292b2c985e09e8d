//! Scripted input and recording output for driving the picker without a terminal

use super::error::Result;
use super::ratatui_adapter::events::drive;
use super::ratatui_adapter::state::SessionState;
use super::traits::{KeySource, Picker, Screen};
use super::types::{InputEvent, Mode, PickOutcome};
use crate::config::DisplayConfig;
use crate::index::EntryIndex;
use crate::keybinds::{KeybindConfig, KeybindMap};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;

/// Key source that replays a fixed sequence of events
///
/// Returns `None` once the sequence is used up, which the picker treats as
/// a cancellation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    events: VecDeque<InputEvent>,
}

impl ScriptedKeys {
    /// Create an empty script
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one plain character key per char of `text`
    #[must_use]
    pub fn typed(mut self, text: &str) -> Self {
        for c in text.chars() {
            self.events
                .push_back(InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        self
    }

    /// Append an unmodified key
    #[must_use]
    pub fn key(mut self, code: KeyCode) -> Self {
        self.events
            .push_back(InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        self
    }

    /// Append a Ctrl+`c` key
    #[must_use]
    pub fn ctrl(mut self, c: char) -> Self {
        self.events
            .push_back(InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
        self
    }

    /// Append a terminal resize
    #[must_use]
    pub fn resize(mut self) -> Self {
        self.events.push_back(InputEvent::Resize);
        self
    }

    /// Number of events not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

/// What one draw call saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub query: String,
    pub filtered_labels: Vec<String>,
    pub cursor: Option<usize>,
}

/// Screen that records a snapshot per draw
#[derive(Debug, Clone, Default)]
pub struct RecordingScreen {
    pub frames: Vec<FrameSnapshot>,
}

impl Screen for RecordingScreen {
    fn draw(&mut self, state: &SessionState) -> Result<()> {
        self.frames.push(FrameSnapshot {
            query: state.query.clone(),
            filtered_labels: state
                .filtered
                .iter()
                .map(|hit| hit.entry.label.clone())
                .collect(),
            cursor: state.cursor,
        });
        Ok(())
    }
}

/// Picker that runs the real state machine against scripted keys
#[derive(Debug, Clone)]
pub struct MockPicker {
    keys: ScriptedKeys,
    binds: KeybindMap,
    display: DisplayConfig,
    /// Frames drawn during the last `pick`
    pub screen: RecordingScreen,
}

impl MockPicker {
    /// Create a picker that will replay `keys` with the default bindings
    #[must_use]
    pub fn new(keys: ScriptedKeys) -> Self {
        Self::with_keybinds(keys, &KeybindConfig::default())
    }

    /// Create a picker using custom bindings
    #[must_use]
    pub fn with_keybinds(keys: ScriptedKeys, keybinds: &KeybindConfig) -> Self {
        Self {
            keys,
            binds: keybinds.keymap(),
            display: DisplayConfig::default(),
            screen: RecordingScreen::default(),
        }
    }

    /// Apply `[display]` wrap and page size the way the terminal picker does
    #[must_use]
    pub fn with_display(mut self, display: &DisplayConfig) -> Self {
        self.display = display.clone();
        self
    }
}

impl Picker for MockPicker {
    fn pick(&mut self, index: &mut EntryIndex, mode: Mode, query: &str) -> Result<PickOutcome> {
        let mut state = SessionState::new(index, mode, query)
            .with_wrap(self.display.wrap)
            .with_page_size(self.display.max_rows);
        self.screen = RecordingScreen::default();
        drive(&mut state, index, &self.binds, &mut self.keys, &mut self.screen)
    }
}
