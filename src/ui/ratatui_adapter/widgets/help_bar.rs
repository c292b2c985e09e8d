//! Help bar widget for displaying keybind hints

use crate::keybinds::{KeybindConfig, key_to_string, parse_key_string};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "enter", "ctrl-k")
    pub key: String,
    /// Action description (e.g., "open", "cancel")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the main actions, using the first key bound to each
    ///
    /// Disabled actions are left out.
    #[must_use]
    pub fn hints_for(keybinds: &KeybindConfig) -> Vec<KeyHint> {
        [
            ("confirm", "open"),
            ("cancel", "cancel"),
            ("down", "next"),
            ("up", "prev"),
            ("clear_query", "clear"),
        ]
        .into_iter()
        .filter_map(|(action, label)| {
            let key = keybinds
                .get(action)
                .iter()
                .find_map(|key| parse_key_string(key))?;
            Some(KeyHint::new(key_to_string(&key), label))
        })
        .collect()
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_keybinds() {
        let hints = HelpBar::hints_for(&KeybindConfig::default());
        assert_eq!(hints[0], KeyHint::new("enter", "open"));
        assert_eq!(hints[1], KeyHint::new("esc", "cancel"));
        assert_eq!(hints[2], KeyHint::new("↓", "next"));

        let custom: KeybindConfig = toml::from_str(
            r#"
            confirm = ["ctrl-o", "enter"]
            clear_query = "none"
            "#,
        )
        .unwrap();
        let hints = HelpBar::hints_for(&custom);
        assert_eq!(hints[0], KeyHint::new("ctrl-o", "open"));
        assert!(hints.iter().all(|h| h.action != "clear"));
    }
}
