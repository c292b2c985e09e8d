//! Frame layout
//!
//! `render` is a pure function of the session state and the view settings.

use super::state::SessionState;
use super::theme::Theme;
use super::widgets::{EntryList, HelpBar, KeyHint, SearchBar};
use crate::config::DisplayConfig;
use crate::keybinds::KeybindConfig;
use crate::ui::types::Mode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use std::path::PathBuf;

/// Everything besides the session state that affects a frame
#[derive(Debug, Clone)]
pub struct View {
    pub display: DisplayConfig,
    pub theme: Theme,
    pub hints: Vec<KeyHint>,
    /// Home directory used to shorten paths
    pub home: Option<PathBuf>,
}

impl View {
    /// Build a view from the display settings and active key bindings
    #[must_use]
    pub fn new(display: DisplayConfig, keybinds: &KeybindConfig) -> Self {
        Self {
            display,
            theme: Theme::default(),
            hints: HelpBar::hints_for(keybinds),
            home: dirs::home_dir(),
        }
    }
}

/// Draw the search bar, the entry list and the hint bar
pub fn render(frame: &mut Frame, state: &SessionState, view: &View) {
    let area = frame.area();
    let list_height = u16::try_from(view.display.max_rows + 2)
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(4));

    let [search_area, list_area, hint_area, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(list_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let badge = match state.mode {
        Mode::TmuxPopup => Some("tmux"),
        Mode::Normal => None,
    };
    frame.render_widget(
        SearchBar::new(&state.query, ">", &view.theme)
            .counts(state.filtered.len(), state.total)
            .badge(badge),
        search_area,
    );

    frame.render_widget(
        EntryList::new(state, &view.display, &view.theme).home(view.home.as_deref()),
        list_area,
    );

    frame.render_widget(HelpBar::new(&view.hints, &view.theme), hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Entry, EntryIndex, EntrySource};
    use crate::keybinds::PickerAction;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::collections::BTreeSet;

    fn view() -> View {
        let mut view = View::new(DisplayConfig::default(), &KeybindConfig::default());
        view.home = Some(PathBuf::from("/home/u"));
        view
    }

    fn entry(label: &str, tags: &[&str], stale: bool) -> Entry {
        Entry {
            label: label.to_string(),
            path: PathBuf::from(format!("/home/u/{label}")),
            tags: tags.iter().map(|t| (*t).to_string()).collect::<BTreeSet<_>>(),
            stale,
            source: EntrySource::Declared,
        }
    }

    fn draw(state: &SessionState, view: &View) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, state, view)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_lists_entries() {
        let mut index = EntryIndex::from_entries([
            entry("proj-a", &["work"], false),
            entry("proj-b", &[], true),
        ]);
        let state = SessionState::new(&mut index, Mode::Normal, "");
        let screen = draw(&state, &view());

        assert!(screen.contains("2/2"));
        assert!(screen.contains("> proj-a"));
        assert!(screen.contains("~/proj-a"));
        assert!(screen.contains("#work"));
        assert!(screen.contains("(missing)"));
        assert!(screen.contains("enter:open"));
        assert!(!screen.contains("[tmux]"));
    }

    #[test]
    fn test_render_follows_query_and_cursor() {
        let mut index = EntryIndex::from_entries([
            entry("proj-a", &[], false),
            entry("proj-b", &[], false),
        ]);
        let mut state = SessionState::new(&mut index, Mode::TmuxPopup, "");
        state.apply(PickerAction::Down, &mut index);
        let screen = draw(&state, &view());
        assert!(screen.contains("> proj-b"));
        assert!(screen.contains("[tmux]"));

        state.apply(PickerAction::Insert('z'), &mut index);
        let screen = draw(&state, &view());
        assert!(screen.contains("0/2"));
        assert!(screen.contains("No matches"));
    }

    #[test]
    fn test_render_empty_index_hint() {
        let mut index = EntryIndex::default();
        let state = SessionState::new(&mut index, Mode::Normal, "");
        let screen = draw(&state, &view());
        assert!(screen.contains("No entries configured"));
    }

    #[test]
    fn test_render_keeps_cursor_visible() {
        let labels: Vec<String> = (0..30).map(|i| format!("dir-{i:02}")).collect();
        let mut index =
            EntryIndex::from_entries(labels.iter().map(|l| entry(l, &[], false)));
        let mut display = DisplayConfig::default();
        display.max_rows = 5;
        let mut view = view();
        view.display = display;

        let mut state = SessionState::new(&mut index, Mode::Normal, "");
        state.apply(PickerAction::Last, &mut index);
        let screen = draw(&state, &view);
        assert!(screen.contains("> dir-29"));
        assert!(!screen.contains("dir-00"));
    }
}
