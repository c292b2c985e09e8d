//! Configuration module for tmux-quickselect
//!
//! Declares the selectable directories, the roots to scan for more of them,
//! and display / tmux / keybind preferences. Configuration is stored in the
//! user's config directory (`~/.config/tmux-quickselect/config.toml` on Linux)
//! and is read-only for the lifetime of a session.

mod error;
mod setup;

pub use error::ConfigError;
pub use setup::{DEFAULT_CONFIG, InstallOutcome, install_default};

use crate::keybinds::KeybindConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory declared in the `[[entries]]` list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EntryConfig {
    /// Display label; defaults to the directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Directory path, absolute or starting with `~`
    pub path: PathBuf,

    /// Free-form tags, searchable only through the label/path they accompany
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl EntryConfig {
    /// Create an entry with an explicit label and no tags
    #[must_use]
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: Some(label.into()),
            path: path.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Add tags to the entry
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// The label to display: the configured one, or the last path component
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| dir_name(&self.path))
    }
}

/// A directory whose subdirectories are offered as entries (`[[roots]]`)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RootConfig {
    /// Directory to scan, absolute or starting with `~`
    pub path: PathBuf,

    /// How many directory levels below the root to offer
    #[serde(default = "default_depth")]
    pub depth: usize,

    /// Tags given to every scanned entry
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    /// Also offer directories whose name starts with `.`
    #[serde(default)]
    pub include_hidden: bool,
}

impl RootConfig {
    /// Create a root scanned one level deep
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            depth: default_depth(),
            tags: BTreeSet::new(),
            include_hidden: false,
        }
    }

    /// Set the scan depth
    #[must_use]
    pub const fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// Display preferences (`[display]`)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of entry rows shown at once
    pub max_rows: usize,
    /// Column width reserved for labels
    pub label_width: usize,
    /// Show the path next to the label
    pub show_path: bool,
    /// Show tags next to the path
    pub show_tags: bool,
    /// Moving past the last row jumps to the first (and vice versa)
    pub wrap: bool,
    /// Title of the list block
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: 15,
            label_width: 28,
            show_path: true,
            show_tags: true,
            wrap: false,
            title: "Quick Select".to_string(),
        }
    }
}

/// What the tmux bridge does with the selected directory
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TmuxAction {
    /// Open a new window whose working directory is the selection
    #[default]
    NewWindow,
    /// Type `cd <dir>` into the pane the popup was opened over
    Cd,
}

/// How new tmux windows are named
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowName {
    /// Use the entry label
    #[default]
    Label,
    /// Use the last path component
    Basename,
}

/// tmux preferences (`[tmux]`)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TmuxConfig {
    /// Action taken in popup mode
    pub action: TmuxAction,
    /// Naming scheme for windows created by `new-window`
    pub window_name: WindowName,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct QsConfig {
    /// Declared entries, in display order
    #[serde(default)]
    pub entries: Vec<EntryConfig>,

    /// Roots whose subdirectories are scanned at startup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<RootConfig>,

    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,

    /// tmux preferences
    #[serde(default)]
    pub tmux: TmuxConfig,

    /// Keybind overrides
    #[serde(default, skip_serializing_if = "KeybindConfig::is_empty")]
    pub keybinds: KeybindConfig,
}

fn default_depth() -> usize {
    1
}

impl QsConfig {
    /// Get the path to the per-user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("tmux-quickselect").join("config.toml"))
    }

    /// Load and validate configuration from `path`
    ///
    /// Scalar settings can be overridden from the environment with
    /// `QS_<SECTION>__<KEY>`, e.g. `QS_DISPLAY__MAX_ROWS=20`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if the file does not exist
    /// - `ConfigError::Parse` if it is not valid TOML or does not fit the schema
    /// - `ConfigError::Invalid` if a value fails validation
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let parse_error = |e: ::config::ConfigError| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::from(path.to_path_buf()).format(::config::FileFormat::Toml),
            )
            .add_source(
                ::config::Environment::with_prefix("QS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(parse_error)?;

        let config: Self = settings.try_deserialize().map_err(parse_error)?;
        config.validate(path)?;

        tracing::debug!(
            path = %path.display(),
            entries = config.entries.len(),
            roots = config.roots.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load configuration, falling back to the empty default if the file is absent
    ///
    /// # Errors
    ///
    /// Returns any `ConfigError` other than `NotFound`.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(e) if e.is_not_found() => {
                tracing::warn!(
                    path = %path.display(),
                    "config file not found, using empty default (run `qs init` to create one)"
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;

        fs::write(path, toml_string).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check values the schema alone cannot express
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self, source: &Path) -> Result<(), ConfigError> {
        for (i, entry) in self.entries.iter().enumerate() {
            check_dir_path(source, &format!("entries[{i}].path"), &entry.path)?;
            if entry.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                return Err(ConfigError::invalid(
                    source,
                    format!("entries[{i}].label"),
                    "label must not be empty",
                ));
            }
        }

        for (i, root) in self.roots.iter().enumerate() {
            check_dir_path(source, &format!("roots[{i}].path"), &root.path)?;
            if root.depth == 0 {
                return Err(ConfigError::invalid(
                    source,
                    format!("roots[{i}].depth"),
                    "depth must be at least 1",
                ));
            }
        }

        if self.display.max_rows == 0 {
            return Err(ConfigError::invalid(
                source,
                "display.max_rows",
                "must be at least 1",
            ));
        }

        self.keybinds.validate().map_err(|problem| {
            ConfigError::invalid(
                source,
                format!("keybinds.{}", problem.action),
                problem.message,
            )
        })
    }
}

fn check_dir_path(source: &Path, field: &str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::invalid(source, field, "path must not be empty"));
    }
    if !expand_tilde(path).is_absolute() {
        return Err(ConfigError::invalid(
            source,
            field,
            format!("path must be absolute or start with '~' (got '{}')", path.display()),
        ));
    }
    Ok(())
}

/// Expand a leading `~` to the user's home directory
///
/// Paths without a leading `~` component are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Last path component as a string, or the whole path for `/`
#[must_use]
pub fn dir_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = QsConfig::default();
        assert!(config.entries.is_empty());
        assert!(config.roots.is_empty());
        assert_eq!(config.display.max_rows, 15);
        assert_eq!(config.tmux.action, TmuxAction::NewWindow);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = QsConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_not_found());

        let config = QsConfig::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, QsConfig::default());
    }

    #[test]
    fn test_load_entries_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[[entries]]
label = "proj-b"
path = "/home/u/proj-b"
tags = ["work", "rust"]

[[entries]]
path = "/home/u/proj-a"

[display]
max_rows = 8

[tmux]
action = "cd"
"#,
        );

        let config = QsConfig::load(&path).unwrap();
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].display_label(), "proj-b");
        assert!(config.entries[0].tags.contains("rust"));
        assert_eq!(config.entries[1].label, None);
        assert_eq!(config.entries[1].display_label(), "proj-a");
        assert_eq!(config.display.max_rows, 8);
        assert!(config.display.show_path);
        assert_eq!(config.tmux.action, TmuxAction::Cd);
    }

    #[test]
    fn test_roundtrip_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = QsConfig::default();
        config.entries = vec![
            EntryConfig::new("zeta", "/srv/zeta").with_tags(["b", "a"]),
            EntryConfig::new("alpha", "/srv/alpha"),
            EntryConfig {
                label: None,
                path: PathBuf::from("~/notes"),
                tags: BTreeSet::new(),
            },
        ];
        config.roots = vec![RootConfig::new("~/Git").with_depth(2)];
        config.display.wrap = true;

        config.save(&path).unwrap();
        let loaded = QsConfig::load(&path).unwrap();

        assert_eq!(loaded.entries, config.entries);
        assert_eq!(loaded.roots, config.roots);
        assert_eq!(loaded.display, config.display);
    }

    #[test]
    fn test_syntax_error_has_context() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[[entries]]\nlabel = \"x\"\npath = \n");

        match QsConfig::load(&path).unwrap_err() {
            ConfigError::Parse { path: p, message } => {
                assert_eq!(p, path);
                assert!(!message.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[[entries]]\nlabel = \"no path\"\n");

        let err = QsConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("path"));
    }

    #[test]
    fn test_relative_path_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[[entries]]\npath = \"/ok\"\n\n[[entries]]\npath = \"relative/dir\"\n",
        );

        match QsConfig::load(&path).unwrap_err() {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "entries[1].path"),
            other => panic!("expected invalid error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_depth_and_rows_are_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[[roots]]\npath = \"/srv\"\ndepth = 0\n");
        match QsConfig::load(&path).unwrap_err() {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "roots[0].depth"),
            other => panic!("expected invalid error, got {other:?}"),
        }

        let path = write_config(&dir, "[display]\nmax_rows = 0\n");
        match QsConfig::load(&path).unwrap_err() {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "display.max_rows"),
            other => panic!("expected invalid error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_keybind_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[keybinds]\nup = \"warp-9\"\n");
        match QsConfig::load(&path).unwrap_err() {
            ConfigError::Invalid { field, message, .. } => {
                assert_eq!(field, "keybinds.up");
                assert!(message.contains("warp-9"));
            }
            other => panic!("expected invalid error, got {other:?}"),
        }
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/Git")), home.join("Git"));
        assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
        assert_eq!(expand_tilde(Path::new("~other/x")), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(dir_name(Path::new("/home/u/proj-a")), "proj-a");
        assert_eq!(dir_name(Path::new("/")), "/");
    }
}
