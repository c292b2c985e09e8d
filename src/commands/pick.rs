//! Pick command - run the picker and deliver the selection

use crate::bridge::{Applied, Multiplexer, apply_selection};
use crate::config::{QsConfig, RootConfig};
use crate::index::EntryIndex;
use crate::ui::{Mode, PickOutcome, Picker};
use crate::{EXIT_CANCELLED, EXIT_OK, Result};
use std::io::Write;

/// Options from the command line
#[derive(Debug, Clone, Default)]
pub struct PickOptions {
    pub mode: Mode,
    /// Query typed before the first key press
    pub query: String,
    /// Scan the configured roots
    pub scan: bool,
}

/// Execute the pick command
///
/// Returns `EXIT_OK` when a selection was delivered and `EXIT_CANCELLED`
/// when the user left without one.
///
/// # Errors
///
/// Returns `QsError::Ui` if the picker cannot run and `QsError::Bridge` if
/// the selection cannot be delivered.
pub fn execute(
    config: &QsConfig,
    options: &PickOptions,
    picker: &mut dyn Picker,
    mux: &dyn Multiplexer,
    out: &mut dyn Write,
) -> Result<u8> {
    let roots: &[RootConfig] = if options.scan { &config.roots } else { &[] };
    let mut index = EntryIndex::build(config, roots);

    match picker.pick(&mut index, options.mode, &options.query)? {
        PickOutcome::Selected(entry) => {
            let applied = apply_selection(&entry, options.mode, mux, out)?;
            tracing::debug!(?applied, label = %entry.label, "selection delivered");
            if applied == Applied::Degraded {
                tracing::info!("selection printed because no tmux session was reachable");
            }
            Ok(EXIT_OK)
        }
        PickOutcome::Cancelled => Ok(EXIT_CANCELLED),
    }
}
