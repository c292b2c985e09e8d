//! tmux as the host multiplexer

use super::{BridgeError, Multiplexer, SwitchRequest};
use crate::config::{TmuxAction, TmuxConfig, WindowName, dir_name};
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Quote `s` for a POSIX shell
#[must_use]
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Drives the tmux server the popup belongs to
#[derive(Debug, Clone)]
pub struct Tmux {
    action: TmuxAction,
    window_name: WindowName,
    binary: OsString,
    /// Value of `$TMUX`; `None` when not running inside tmux
    host: Option<OsString>,
}

impl Tmux {
    /// Create a bridge from the `[tmux]` settings and the current environment
    #[must_use]
    pub fn from_env(config: &TmuxConfig) -> Self {
        Self {
            action: config.action,
            window_name: config.window_name,
            binary: OsString::from("tmux"),
            host: std::env::var_os("TMUX").filter(|v| !v.is_empty()),
        }
    }

    /// Override the detected host session
    #[must_use]
    pub fn with_host(mut self, host: Option<OsString>) -> Self {
        self.host = host;
        self
    }

    /// Use a different tmux executable
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<OsString>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Arguments passed to tmux for `request`
    #[must_use]
    pub fn command_args(&self, request: &SwitchRequest<'_>) -> Vec<OsString> {
        match self.action {
            TmuxAction::NewWindow => {
                let name = match self.window_name {
                    WindowName::Label => request.label.to_string(),
                    WindowName::Basename => dir_name(request.path),
                };
                vec![
                    "new-window".into(),
                    "-c".into(),
                    request.path.as_os_str().to_owned(),
                    "-n".into(),
                    name.into(),
                ]
            }
            TmuxAction::Cd => {
                let line = format!("cd {}", shell_quote(&request.path.to_string_lossy()));
                // typed literally, then Enter as a key in the same tmux call
                vec![
                    "send-keys".into(),
                    "-l".into(),
                    line.into(),
                    ";".into(),
                    "send-keys".into(),
                    "Enter".into(),
                ]
            }
        }
    }
}

impl Multiplexer for Tmux {
    fn switch_to(&self, request: &SwitchRequest<'_>) -> Result<(), BridgeError> {
        if self.host.is_none() {
            return Err(BridgeError::no_host("not running inside tmux ($TMUX is not set)"));
        }
        if !request.path.is_dir() {
            return Err(BridgeError::PathMissing {
                path: request.path.to_path_buf(),
            });
        }

        let args = self.command_args(request);
        tracing::debug!(?args, "running tmux");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                BridgeError::no_host(format!(
                    "failed to run '{}': {e}",
                    self.binary.to_string_lossy()
                ))
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(BridgeError::no_host(format!(
                "tmux exited with status {:?}: {}",
                output.status.code(),
                stderr.trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn tmux(action: TmuxAction, window_name: WindowName) -> Tmux {
        Tmux::from_env(&TmuxConfig {
            action,
            window_name,
        })
        .with_host(Some("/tmp/tmux-1000/default,1,0".into()))
    }

    fn request(path: &Path) -> SwitchRequest<'_> {
        SwitchRequest {
            path,
            label: "my proj",
        }
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/srv/app"), "'/srv/app'");
        assert_eq!(shell_quote("/tmp/it's here"), r"'/tmp/it'\''s here'");
    }

    #[test]
    fn test_new_window_args() {
        let path = Path::new("/home/u/Git/qs");
        let args = tmux(TmuxAction::NewWindow, WindowName::Label).command_args(&request(path));
        assert_eq!(args, vec!["new-window", "-c", "/home/u/Git/qs", "-n", "my proj"]);

        let args = tmux(TmuxAction::NewWindow, WindowName::Basename).command_args(&request(path));
        assert_eq!(args[4], "qs");
    }

    #[test]
    fn test_cd_args() {
        let path = Path::new("/home/u/it's");
        let args = tmux(TmuxAction::Cd, WindowName::Label).command_args(&request(path));
        assert_eq!(
            args,
            vec![
                "send-keys",
                "-l",
                r"cd '/home/u/it'\''s'",
                ";",
                "send-keys",
                "Enter"
            ]
        );
    }

    #[test]
    fn test_cd_keeps_key_names_literal() {
        let bridge = tmux(TmuxAction::Cd, WindowName::Label);
        let args = bridge.command_args(&request(Path::new("/Enter")));
        assert_eq!(args[1], "-l");
        assert_eq!(args[2], "cd '/Enter'");
        assert_eq!(args[5], "Enter");
    }

    #[test]
    fn test_no_host_session() {
        let bridge = tmux(TmuxAction::NewWindow, WindowName::Label).with_host(None);
        let result = bridge.switch_to(&request(Path::new("/home/u/proj-a")));
        assert!(matches!(result, Err(BridgeError::NoHostSession { .. })));
    }

    #[test]
    fn test_missing_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let result = tmux(TmuxAction::NewWindow, WindowName::Label).switch_to(&request(&missing));
        assert!(matches!(result, Err(BridgeError::PathMissing { .. })));
    }

    #[test]
    fn test_missing_binary_is_no_host() {
        let tmp = TempDir::new().unwrap();
        let bridge = tmux(TmuxAction::NewWindow, WindowName::Label)
            .with_binary("qs-test-no-such-tmux-binary");
        let result = bridge.switch_to(&request(tmp.path()));
        assert!(matches!(result, Err(BridgeError::NoHostSession { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_decides_outcome() {
        let tmp = TempDir::new().unwrap();
        let ok = tmux(TmuxAction::Cd, WindowName::Label).with_binary("true");
        assert!(ok.switch_to(&request(tmp.path())).is_ok());

        let failing = tmux(TmuxAction::Cd, WindowName::Label).with_binary("false");
        assert!(matches!(
            failing.switch_to(&request(tmp.path())),
            Err(BridgeError::NoHostSession { .. })
        ));
    }
}
