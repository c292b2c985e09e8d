//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist (recoverable: callers fall back to defaults)
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The file exists but is not valid TOML or does not fit the schema
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// Parser message, including line or field context
        message: String,
    },

    /// The file parsed but a value is semantically invalid
    #[error("Invalid value for `{field}` in {}: {message}", path.display())]
    Invalid {
        /// Path of the offending file
        path: PathBuf,
        /// Dotted field path, e.g. `entries[2].path`
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The per-user config directory could not be determined
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Serializing the configuration to TOML failed
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// IO error while reading or writing the config file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Whether the caller may continue with the built-in default config
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn invalid(
        path: &std::path::Path,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            path: path.to_path_buf(),
            field: field.into(),
            message: message.into(),
        }
    }
}
