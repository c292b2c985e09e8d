//! Ratatui-based picker
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiPicker                     │
//! │  (implements Picker trait)                  │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   drive    │ │  render   │ │ Terminal  │
//! │ (events)   │ │ (widgets) │ │  Guard    │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! `drive` pulls events from a `KeySource`, applies them to a `SessionState`
//! and hands every changed state to a `Screen`. Only `RatatuiPicker` touches
//! the real terminal.

pub mod events;
mod finder;
pub mod render;
pub mod state;
mod terminal;
mod theme;
pub mod widgets;

pub use events::{drive, key_to_action};
pub use finder::{RatatuiPicker, TerminalScreen};
pub use render::{View, render};
pub use state::{Phase, SessionState, scroll_offset};
pub use terminal::{TerminalGuard, TerminalKeys};
pub use theme::Theme;
