//! Entry list widget for displaying ranked hits

use crate::config::DisplayConfig;
use crate::index::Hit;
use crate::ui::ratatui_adapter::state::{SessionState, scroll_offset};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};
use std::path::Path;

/// Replace a leading home directory with `~`
#[must_use]
pub fn abbreviate_home(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

/// List of hits with cursor marker, highlighted label, path and tags
pub struct EntryList<'a> {
    state: &'a SessionState,
    display: &'a DisplayConfig,
    theme: &'a Theme,
    home: Option<&'a Path>,
}

impl<'a> EntryList<'a> {
    /// Create a new entry list widget
    #[must_use]
    pub const fn new(state: &'a SessionState, display: &'a DisplayConfig, theme: &'a Theme) -> Self {
        Self {
            state,
            display,
            theme,
            home: None,
        }
    }

    /// Abbreviate paths under `home` as `~/...`
    #[must_use]
    pub const fn home(mut self, home: Option<&'a Path>) -> Self {
        self.home = home;
        self
    }

    fn label_spans(&self, hit: &Hit, base: Style) -> Vec<Span<'a>> {
        let width = self.display.label_width.max(1);
        let chars: Vec<char> = hit.entry.label.chars().collect();
        let truncated = chars.len() > width;
        let shown = if truncated { width - 1 } else { chars.len() };

        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_matched = false;

        for (i, c) in chars.iter().take(shown).enumerate() {
            let matched = u32::try_from(i).is_ok_and(|i| hit.label_positions.contains(&i));
            if matched != run_matched && !run.is_empty() {
                spans.push(self.label_run(std::mem::take(&mut run), run_matched, base));
            }
            run_matched = matched;
            run.push(*c);
        }
        if !run.is_empty() {
            spans.push(self.label_run(run, run_matched, base));
        }

        let mut tail = String::new();
        if truncated {
            tail.push('…');
        }
        tail.push_str(&" ".repeat(width.saturating_sub(shown + usize::from(truncated))));
        spans.push(Span::styled(tail, base));
        spans
    }

    fn label_run(&self, text: String, matched: bool, base: Style) -> Span<'a> {
        if matched {
            Span::styled(text, base.patch(self.theme.match_style()))
        } else {
            Span::styled(text, base)
        }
    }

    fn render_hit(&self, hit: &Hit, is_cursor: bool) -> ListItem<'a> {
        let base = if hit.entry.stale {
            self.theme.stale_style()
        } else {
            Style::default()
        };

        let marker = if is_cursor { ">" } else { " " };
        let mut spans = vec![Span::styled(marker, self.theme.cursor_style()), Span::raw(" ")];
        spans.extend(self.label_spans(hit, base));

        if self.display.show_path {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                abbreviate_home(&hit.entry.path, self.home),
                self.theme.path_style(),
            ));
        }
        if self.display.show_tags && !hit.entry.tags.is_empty() {
            let tags: Vec<String> = hit.entry.tags.iter().map(|t| format!("#{t}")).collect();
            spans.push(Span::raw("  "));
            spans.push(Span::styled(tags.join(" "), self.theme.tag_style()));
        }
        if hit.entry.stale {
            spans.push(Span::styled("  (missing)", self.theme.dimmed_style()));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" {} ", self.display.title));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.filtered.is_empty() {
            let message = if self.state.total == 0 {
                "No entries configured, run `qs init`"
            } else {
                "No matches"
            };
            Paragraph::new(Span::styled(message, self.theme.dimmed_style())).render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let start = scroll_offset(self.state.cursor, visible);

        let items: Vec<ListItem> = self
            .state
            .filtered
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(i, hit)| self.render_hit(hit, self.state.cursor == Some(i)))
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_abbreviate_home() {
        let home = PathBuf::from("/home/u");
        assert_eq!(
            abbreviate_home(Path::new("/home/u/Git/qs"), Some(&home)),
            "~/Git/qs"
        );
        assert_eq!(abbreviate_home(Path::new("/home/u"), Some(&home)), "~");
        assert_eq!(abbreviate_home(Path::new("/srv/www"), Some(&home)), "/srv/www");
        assert_eq!(abbreviate_home(Path::new("/home/u/x"), None), "/home/u/x");
    }
}
