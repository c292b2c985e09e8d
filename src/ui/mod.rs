//! Interactive picker
//!
//! Business logic talks to the `Picker` trait; the ratatui implementation
//! and the scripted one in `mock` both run the same state machine.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      cli (run_pick)                     │
//! └────────────────┬────────────────────────┘
//!                  │ Picker
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ RatatuiPicker │  │ MockPicker        │
//! │ (terminal)    │  │ (ScriptedKeys)    │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use tmux_quickselect::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Config created");
//! output.warning("Not inside tmux");
//! ```

mod error;
mod traits;
mod types;

pub mod mock;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::{Phase, RatatuiPicker, SessionState};
pub use traits::{KeySource, Picker, Screen};
pub use types::{InputEvent, Mode, PickOutcome};
