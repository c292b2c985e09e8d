//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query, the match count and an optional badge
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Prompt text
    prompt: &'a str,
    /// Number of hits for the query
    matched: usize,
    /// Number of entries overall
    total: usize,
    /// Short label shown on the right of the title (e.g. "tmux")
    badge: Option<&'a str>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            prompt,
            matched: 0,
            total: 0,
            badge: None,
            theme,
        }
    }

    /// Set the match counter
    #[must_use]
    pub const fn counts(mut self, matched: usize, total: usize) -> Self {
        self.matched = matched;
        self.total = total;
        self
    }

    /// Show a badge in the title
    #[must_use]
    pub const fn badge(mut self, badge: Option<&'a str>) -> Self {
        self.badge = badge;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = vec![Span::raw(format!(" {}/{} ", self.matched, self.total))];
        if let Some(badge) = self.badge {
            title.push(Span::styled(format!("[{badge}] "), self.theme.badge_style()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(Line::from(title));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(self.prompt, self.theme.dimmed_style()),
            Span::raw(" "),
            Span::raw(self.query),
            Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
