//! Keybind system for the interactive picker.
//!
//! Every picker action has default keys; the `[keybinds]` config table can
//! rebind or disable them (`"none"`).

pub mod actions;
pub mod config;
pub mod keys;

pub use actions::PickerAction;
pub use config::{KeybindConfig, KeybindDef, KeybindMap, KeybindProblem};
pub use keys::{KeyChord, key_to_string, parse_key_string};
