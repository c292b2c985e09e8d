//! Ratatui-backed picker

use super::events::drive;
use super::render::{View, render};
use super::state::SessionState;
use super::terminal::{TerminalGuard, TerminalKeys};
use crate::config::DisplayConfig;
use crate::index::EntryIndex;
use crate::keybinds::KeybindConfig;
use crate::ui::error::Result;
use crate::ui::traits::{Picker, Screen};
use crate::ui::types::{Mode, PickOutcome};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stderr};

/// Screen drawing onto the real terminal
pub struct TerminalScreen<'a> {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    view: &'a View,
}

impl Screen for TerminalScreen<'_> {
    fn draw(&mut self, state: &SessionState) -> Result<()> {
        self.terminal.draw(|frame| render(frame, state, self.view))?;
        Ok(())
    }
}

/// Interactive picker on the controlling terminal
#[derive(Debug, Clone)]
pub struct RatatuiPicker {
    view: View,
    keybinds: KeybindConfig,
}

impl RatatuiPicker {
    /// Create a picker with the given display settings and key bindings
    #[must_use]
    pub fn new(display: DisplayConfig, keybinds: KeybindConfig) -> Self {
        Self {
            view: View::new(display, &keybinds),
            keybinds,
        }
    }
}

impl Picker for RatatuiPicker {
    fn pick(&mut self, index: &mut EntryIndex, mode: Mode, query: &str) -> Result<PickOutcome> {
        let binds = self.keybinds.keymap();
        let mut state = SessionState::new(index, mode, query)
            .with_wrap(self.view.display.wrap)
            .with_page_size(self.view.display.max_rows);

        let _guard = TerminalGuard::acquire()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
        let mut screen = TerminalScreen {
            terminal,
            view: &self.view,
        };

        let outcome = drive(&mut state, index, &binds, &mut TerminalKeys, &mut screen)?;
        tracing::debug!(
            query = %state.query,
            selected = outcome.selected().is_some(),
            "picker finished"
        );
        Ok(outcome)
    }
}
