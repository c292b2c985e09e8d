//! `qs` entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick a directory and cd into it
//! cd "$(qs)"
//!
//! # From a tmux popup (see `qs init` for the binding)
//! qs --tmux
//!
//! # Start with a query, skip scanning roots
//! qs -q api --no-scan
//!
//! # Non-interactive listing
//! qs list --json
//! ```
//!
//! Exit codes: 0 on a delivered selection or successful command, 1 when the
//! picker was cancelled, 2 on fatal errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tmux_quickselect::{
    EXIT_OK, Result,
    bridge::Tmux,
    cli::{Cli, Commands, write_completions},
    commands::{self, pick::PickOptions},
    config::QsConfig,
    ui::{OutputWriter, RatatuiPicker, StdoutWriter},
};
use tracing_subscriber::EnvFilter;

fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("QS_LOG")
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(QsConfig::config_path()?),
    }
}

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<u8> {
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            write_completions(*shell, &mut io::stdout());
            Ok(EXIT_OK)
        }
        Some(Commands::Init { force }) => {
            commands::init(&config_path(cli)?, *force, output)?;
            Ok(EXIT_OK)
        }
        Some(Commands::List { query, json }) => {
            let config = QsConfig::load_or_default(&config_path(cli)?)?;
            commands::list(
                &config,
                query.as_deref(),
                *json,
                !cli.no_scan,
                &mut io::stdout().lock(),
            )?;
            Ok(EXIT_OK)
        }
        None => {
            let config = QsConfig::load_or_default(&config_path(cli)?)?;
            let options = PickOptions {
                mode: cli.mode(),
                query: cli.query.clone().unwrap_or_default(),
                scan: !cli.no_scan,
            };
            let mut picker = RatatuiPicker::new(config.display.clone(), config.keybinds.clone());
            let mux = Tmux::from_env(&config.tmux);

            commands::pick(&config, &options, &mut picker, &mux, &mut io::stdout().lock())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(&cli);

    let output = StdoutWriter::new();
    match run(&cli, &output) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
