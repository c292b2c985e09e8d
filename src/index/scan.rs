//! Live scanning of root directories
//!
//! Subdirectories are walked depth-first with siblings sorted by name.
//! Symlinks are followed, but every directory is visited at most once:
//! directories are identified by (device, inode) on Unix and by canonical
//! path elsewhere, which keeps symlink cycles from recursing forever.

use crate::config::{RootConfig, expand_tilde};
use std::collections::HashSet;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

/// A directory found under a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDir {
    /// Path relative to the root, e.g. `org/repo`
    pub label: String,
    /// Absolute path
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DirKey {
    #[cfg(unix)]
    Inode(u64, u64),
    #[cfg(not(unix))]
    Path(PathBuf),
}

impl DirKey {
    #[cfg(unix)]
    fn of(_path: &Path, meta: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;
        Self::Inode(meta.dev(), meta.ino())
    }

    #[cfg(not(unix))]
    fn of(path: &Path, _meta: &Metadata) -> Self {
        Self::Path(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
    }
}

/// Walks roots, remembering every directory already offered
#[derive(Debug, Default)]
pub struct Scanner {
    visited: HashSet<DirKey>,
}

impl Scanner {
    /// Create a scanner with an empty visited set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the subdirectories of `root` down to its configured depth
    ///
    /// A missing or unreadable root yields nothing.
    pub fn scan(&mut self, root: &RootConfig) -> Vec<ScannedDir> {
        let base = expand_tilde(&root.path);
        let mut found = Vec::new();

        match fs::metadata(&base) {
            Ok(meta) if meta.is_dir() => {
                self.visited.insert(DirKey::of(&base, &meta));
                self.walk(&base, &base, root.depth, root.include_hidden, &mut found);
            }
            Ok(_) => tracing::warn!(root = %base.display(), "scan root is not a directory"),
            Err(e) => tracing::debug!(root = %base.display(), error = %e, "scan root unavailable"),
        }

        tracing::debug!(root = %base.display(), found = found.len(), "scanned root");
        found
    }

    fn walk(
        &mut self,
        base: &Path,
        dir: &Path,
        depth_left: usize,
        include_hidden: bool,
        found: &mut Vec<ScannedDir>,
    ) {
        if depth_left == 0 {
            return;
        }

        let read = match fs::read_dir(dir) {
            Ok(read) => read,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        let mut children: Vec<(PathBuf, Metadata)> = read
            .filter_map(Result::ok)
            .filter(|entry| include_hidden || !entry.file_name().to_string_lossy().starts_with('.'))
            .filter_map(|entry| {
                let path = entry.path();
                // fs::metadata follows symlinks
                let meta = fs::metadata(&path).ok()?;
                meta.is_dir().then_some((path, meta))
            })
            .collect();
        children.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));

        for (path, meta) in children {
            if !self.visited.insert(DirKey::of(&path, &meta)) {
                tracing::debug!(dir = %path.display(), "already visited, skipping");
                continue;
            }

            let label = path
                .strip_prefix(base)
                .map_or_else(|_| path.display().to_string(), |rel| rel.display().to_string());
            found.push(ScannedDir {
                label,
                path: path.clone(),
            });

            self.walk(base, &path, depth_left - 1, include_hidden, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn labels(found: &[ScannedDir]) -> Vec<&str> {
        found.iter().map(|d| d.label.as_str()).collect()
    }

    fn make_tree(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_depth_one_lists_children_sorted() {
        let tmp = TempDir::new().unwrap();
        make_tree(tmp.path(), &["zeta", "alpha/inner", "mid"]);
        fs::write(tmp.path().join("file.txt"), "not a dir").unwrap();

        let found = Scanner::new().scan(&RootConfig::new(tmp.path()));
        assert_eq!(labels(&found), vec!["alpha", "mid", "zeta"]);
        assert_eq!(found[0].path, tmp.path().join("alpha"));
    }

    #[test]
    fn test_depth_bound() {
        let tmp = TempDir::new().unwrap();
        make_tree(tmp.path(), &["org/repo/src/deep"]);

        let found = Scanner::new().scan(&RootConfig::new(tmp.path()).with_depth(2));
        assert_eq!(labels(&found), vec!["org", "org/repo"]);
    }

    #[test]
    fn test_hidden_dirs() {
        let tmp = TempDir::new().unwrap();
        make_tree(tmp.path(), &[".git", "visible"]);

        let found = Scanner::new().scan(&RootConfig::new(tmp.path()));
        assert_eq!(labels(&found), vec!["visible"]);

        let mut root = RootConfig::new(tmp.path());
        root.include_hidden = true;
        let found = Scanner::new().scan(&root);
        assert_eq!(labels(&found), vec![".git", "visible"]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let found = Scanner::new().scan(&RootConfig::new(tmp.path().join("absent")));
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_terminates() {
        let tmp = TempDir::new().unwrap();
        make_tree(tmp.path(), &["a/b"]);
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("a/loop")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("a"), tmp.path().join("a/b/back")).unwrap();

        let found = Scanner::new().scan(&RootConfig::new(tmp.path()).with_depth(10));
        assert_eq!(labels(&found), vec!["a", "a/b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dir_offered_once() {
        let tmp = TempDir::new().unwrap();
        make_tree(tmp.path(), &["real"]);
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("alias")).unwrap();

        let found = Scanner::new().scan(&RootConfig::new(tmp.path()));
        // "alias" sorts first, so it claims the directory
        assert_eq!(labels(&found), vec!["alias"]);
    }
}
