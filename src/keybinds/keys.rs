//! Key spec parsing (`"ctrl-k"`, `"pgdn"`, `"f1"`) and normalization.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key code plus modifiers, normalized so it can be used as a map key.
///
/// `KeyEvent` also carries kind/state flags that differ between terminals,
/// so lookups go through this type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    /// Create a normalized chord
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        // Shift is already folded into the character itself.
        let modifiers = match code {
            KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        let code = match code {
            KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
                KeyCode::Char(c.to_ascii_lowercase())
            }
            other => other,
        };
        Self { code, modifiers }
    }
}

impl From<KeyEvent> for KeyChord {
    fn from(key: KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Parse a key string like "ctrl-t" into a `KeyChord`
///
/// Returns `None` for unknown key names.
///
/// # Examples
/// ```
/// use tmux_quickselect::keybinds::parse_key_string;
///
/// assert!(parse_key_string("ctrl-k").is_some());
/// assert!(parse_key_string("hyper-q").is_none());
/// ```
#[must_use]
pub fn parse_key_string(s: &str) -> Option<KeyChord> {
    // "-" on its own (or as the last part of "ctrl--") is the minus key
    let (prefix, key_part) = match s.strip_suffix("--") {
        Some(prefix) => (prefix, "-"),
        None if s == "-" => ("", "-"),
        None => match s.rsplit_once('-') {
            Some((prefix, key)) => (prefix, key),
            None => ("", s),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('-').filter(|p| !p.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let lowered = key_part.to_lowercase();
    let code = match lowered.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "btab" | "backtab" => KeyCode::BackTab,
        "bspace" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.starts_with('f') && f.len() > 1 => f[1..].parse().ok().map(KeyCode::F)?,
        _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
        _ => return None,
    };

    Some(KeyChord::new(code, modifiers))
}

/// Human-readable form of a chord, used by the hint bar
#[must_use]
pub fn key_to_string(chord: &KeyChord) -> String {
    let base = match chord.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => "?".to_string(),
    };

    let mut result = String::new();
    if chord.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if chord.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if chord.modifiers.contains(KeyModifiers::SHIFT) {
        result.push_str("shift-");
    }
    result.push_str(&base);
    result
}
