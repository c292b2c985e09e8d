//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **(none)**: open the picker and print or hand off the selection
//! - **list**: print the entries (optionally filtered) without a UI
//! - **init**: write the starter config file
//! - **completions**: print a shell completion script
//!
//! # Examples
//!
//! ```
//! use tmux_quickselect::cli::Cli;
//! use tmux_quickselect::ui::Mode;
//!
//! let cli = Cli::parse_from_args(["qs", "--tmux", "--query", "proj"]);
//! assert_eq!(cli.mode(), Mode::TmuxPopup);
//! ```

use crate::ui::Mode;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "qs")]
#[command(about = "Quickly jump to a directory from a tmux popup or the shell", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run as a tmux popup: hand the selection to the tmux session
    #[arg(long = "tmux")]
    pub tmux: bool,

    /// Start with this query already typed
    #[arg(short = 'q', long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Only offer declared entries, skip scanning roots
    #[arg(long = "no-scan", global = true)]
    pub no_scan: bool,

    /// Config file to use instead of the per-user default
    #[arg(short = 'c', long = "config", env = "QS_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print entries without opening the picker
    #[command(visible_alias = "ls")]
    List {
        /// Only print entries matching this query, best first
        #[arg(short = 'q', long = "query", value_name = "QUERY")]
        query: Option<String>,

        /// Print JSON instead of text
        #[arg(long = "json")]
        json: bool,
    },

    /// Create the config file with a commented starter config
    Init {
        /// Overwrite an existing config file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Picker mode selected by the flags
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.tmux {
            Mode::TmuxPopup
        } else {
            Mode::Normal
        }
    }

    /// Log filter used when `QS_LOG` is not set
    #[must_use]
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Write the completion script for `shell`
pub fn write_completions(shell: Shell, buf: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
