//! Colors and styles for the picker

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the row under the cursor
    pub selection_bg: Color,
    /// Foreground color for the row under the cursor
    pub selection_fg: Color,
    /// Color for matched characters
    pub match_highlight: Color,
    /// Color for the cursor indicator and key names
    pub cursor: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for tags
    pub tag: Color,
    /// Color for paths
    pub path: Color,
    /// Color for entries whose directory is gone
    pub stale: Color,
    /// Color for the tmux badge in the search bar
    pub badge: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            match_highlight: Color::Yellow,
            cursor: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
            path: Color::Gray,
            stale: Color::Red,
            badge: Color::Green,
        }
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for matched characters
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    #[must_use]
    pub fn path_style(&self) -> Style {
        Style::default().fg(self.path)
    }

    /// Style for entries whose directory no longer exists
    #[must_use]
    pub fn stale_style(&self) -> Style {
        Style::default()
            .fg(self.stale)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(self.badge)
            .add_modifier(Modifier::BOLD)
    }
}
