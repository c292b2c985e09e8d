//! First-run installation of the default config file
//!
//! Mirrors what a fresh install needs: the per-user config directory and a
//! commented starter config that users edit by hand.

use super::ConfigError;
use std::fs;
use std::path::Path;

/// Starter configuration written by `qs init`
pub const DEFAULT_CONFIG: &str = r#"# tmux-quickselect configuration
#
# Declared entries come first, in the order written here. Paths must be
# absolute or start with "~". The label defaults to the directory name.
#
# [[entries]]
# label = "dotfiles"
# path = "~/.config"
# tags = ["config"]

# Every subdirectory of a root is offered as well (scanned on each start).
[[roots]]
path = "~/Git"
depth = 1
tags = ["git"]

[display]
max_rows = 15
label_width = 28
show_path = true
show_tags = true
wrap = false
title = "Quick Select"

[tmux]
# "new-window" opens a window in the selected directory,
# "cd" types `cd <dir>` into the pane under the popup.
action = "new-window"
# "label" or "basename"
window_name = "label"

# Rebind or disable ("none") picker actions:
# confirm, cancel, up, down, page_up, page_down, first, last,
# clear_query, delete_word
#
# [keybinds]
# up = ["up", "ctrl-k"]
# cancel = "esc"
"#;

/// What `install_default` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No config existed; the starter config was written
    Created,
    /// A config already existed and was left untouched
    Exists,
    /// A config existed and was replaced because `force` was set
    Overwritten,
}

/// Create the config directory and write the starter config
///
/// An existing file is only replaced when `force` is set.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the directory or file cannot be written.
///
/// # Examples
/// ```no_run
/// use tmux_quickselect::config::{QsConfig, install_default};
///
/// let path = QsConfig::config_path()?;
/// let outcome = install_default(&path, false)?;
/// println!("{outcome:?}");
/// # Ok::<(), tmux_quickselect::config::ConfigError>(())
/// ```
pub fn install_default(path: &Path, force: bool) -> Result<InstallOutcome, ConfigError> {
    let existed = path.exists();
    if existed && !force {
        return Ok(InstallOutcome::Exists);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(if existed {
        InstallOutcome::Overwritten
    } else {
        InstallOutcome::Created
    })
}
