//! Configuration for keybinds.

use super::actions::PickerAction;
use super::keys::{KeyChord, parse_key_string};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Key → action lookup table used by the picker
pub type KeybindMap = HashMap<KeyChord, PickerAction>;

/// Keybind definition - can be single key, multiple keys, or disabled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeybindDef {
    /// Single keybind
    Single(String),
    /// Multiple alternative keybinds for the same action
    Multiple(Vec<String>),
}

impl KeybindDef {
    fn keys(&self) -> Vec<&str> {
        match self {
            Self::Single(key) => vec![key.as_str()],
            Self::Multiple(keys) => keys.iter().map(String::as_str).collect(),
        }
    }
}

/// User overrides from the `[keybinds]` table, keyed by action name.
///
/// Actions that are not mentioned keep their default keys.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindConfig {
    pub overrides: BTreeMap<String, KeybindDef>,
}

/// A problem found while validating the `[keybinds]` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindProblem {
    /// Action name the problem belongs to
    pub action: String,
    /// What is wrong
    pub message: String,
}

fn default_keybinds() -> Vec<(PickerAction, KeybindDef)> {
    let multiple = |keys: &[&str]| KeybindDef::Multiple(keys.iter().map(|k| (*k).to_string()).collect());

    vec![
        (PickerAction::Confirm, KeybindDef::Single("enter".to_string())),
        (PickerAction::Cancel, multiple(&["esc", "ctrl-c", "ctrl-g"])),
        (PickerAction::Up, multiple(&["up", "ctrl-k", "ctrl-p"])),
        (PickerAction::Down, multiple(&["down", "ctrl-j", "ctrl-n"])),
        (PickerAction::PageUp, KeybindDef::Single("pgup".to_string())),
        (PickerAction::PageDown, KeybindDef::Single("pgdn".to_string())),
        (PickerAction::First, KeybindDef::Single("home".to_string())),
        (PickerAction::Last, KeybindDef::Single("end".to_string())),
        (PickerAction::ClearQuery, KeybindDef::Single("ctrl-u".to_string())),
        (PickerAction::DeleteWord, KeybindDef::Single("ctrl-w".to_string())),
    ]
}

impl KeybindConfig {
    /// Whether no action is overridden
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the keybind(s) for a given action name, with overrides applied.
    ///
    /// Returns an empty list if the action is unknown or disabled.
    #[must_use]
    pub fn get(&self, action: &str) -> Vec<String> {
        if self.is_disabled(action) {
            return Vec::new();
        }
        if let Some(def) = self.overrides.get(action) {
            return def.keys().into_iter().map(str::to_string).collect();
        }
        let Some(action) = PickerAction::from_name(action) else {
            return Vec::new();
        };
        default_keybinds()
            .into_iter()
            .find(|(a, _)| *a == action)
            .map(|(_, def)| def.keys().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Check if a keybind is disabled for an action.
    #[must_use]
    pub fn is_disabled(&self, action: &str) -> bool {
        self.overrides.get(action).is_some_and(|def| match def {
            KeybindDef::Single(key) => key == "none",
            KeybindDef::Multiple(keys) => keys.iter().all(|k| k == "none"),
        })
    }

    /// Check every override names a known action and parseable keys.
    ///
    /// # Errors
    ///
    /// Returns the first `KeybindProblem` found.
    pub fn validate(&self) -> Result<(), KeybindProblem> {
        for (action, def) in &self.overrides {
            if PickerAction::from_name(action).is_none() {
                return Err(KeybindProblem {
                    action: action.clone(),
                    message: "unknown action".to_string(),
                });
            }
            for key in def.keys() {
                if key != "none" && parse_key_string(key).is_none() {
                    return Err(KeybindProblem {
                        action: action.clone(),
                        message: format!("unrecognized key '{key}'"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Build the key → action map, defaults first then overrides.
    ///
    /// Unparseable keys are skipped; `validate` reports them at load time.
    #[must_use]
    pub fn keymap(&self) -> KeybindMap {
        let mut map = KeybindMap::new();
        for (name, action) in PickerAction::BINDABLE {
            for key in self.get(name) {
                if let Some(chord) = parse_key_string(&key) {
                    map.insert(chord, action);
                }
            }
        }
        map
    }
}
