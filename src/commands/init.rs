//! Init command - write the starter config and print setup hints

use crate::config::{InstallOutcome, install_default};
use crate::ui::OutputWriter;
use crate::Result;
use std::path::Path;

/// tmux binding that opens the picker in a popup
pub const TMUX_BINDING: &str = r#"bind-key O display-popup -E -w 70% -h 60% "qs --tmux""#;

/// Execute the init command
///
/// # Errors
///
/// Returns `QsError::Config` if the config file cannot be written.
pub fn execute(path: &Path, force: bool, output: &dyn OutputWriter) -> Result<InstallOutcome> {
    let outcome = install_default(path, force)?;

    match outcome {
        InstallOutcome::Created => {
            output.success(&format!("Created config at {}", path.display()));
        }
        InstallOutcome::Overwritten => {
            output.success(&format!("Replaced config at {}", path.display()));
        }
        InstallOutcome::Exists => {
            output.warning(&format!(
                "Config already exists at {} (use --force to overwrite)",
                path.display()
            ));
        }
    }

    output.info("Add this to ~/.tmux.conf to open the picker with prefix + O:");
    output.write(&format!("  {TMUX_BINDING}"));
    output.info("From a shell, jump with:");
    output.write(r#"  cd "$(qs)""#);

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{BufferWriter, MessageLevel};
    use tempfile::TempDir;

    #[test]
    fn test_init_reports_outcome_and_hints() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("qs").join("config.toml");
        let output = BufferWriter::new();

        assert_eq!(execute(&path, false, &output).unwrap(), InstallOutcome::Created);
        let messages = output.messages();
        assert_eq!(messages[0].0, MessageLevel::Success);
        assert!(messages.iter().any(|(_, m)| m.contains("display-popup")));

        let output = BufferWriter::new();
        assert_eq!(execute(&path, false, &output).unwrap(), InstallOutcome::Exists);
        assert_eq!(output.messages()[0].0, MessageLevel::Warning);
    }
}
