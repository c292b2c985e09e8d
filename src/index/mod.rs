//! Entry index
//!
//! Merges the entries declared in the config with directories scanned under
//! the configured roots into one ordered, de-duplicated list, and filters it
//! against the picker's query.
//!
//! # Ordering
//!
//! Declared entries come first in file order, then scanned directories in
//! root order. When two entries share a path, the first one wins and keeps
//! its label. `filter` ranks hits by tier (prefix, substring, subsequence),
//! then by gap count, then by this insertion order.

pub mod matcher;
pub mod scan;

pub use matcher::{FieldMatch, MatchTier, Query, QueryMatcher};
pub use scan::{ScannedDir, Scanner};

use crate::config::{EntryConfig, QsConfig, RootConfig, expand_tilde};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

/// Where an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// Listed in `[[entries]]`
    Declared,
    /// Found under a `[[roots]]` directory
    Scanned,
}

/// One selectable directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Text shown in the list and matched against the query
    pub label: String,
    /// Absolute directory path
    pub path: PathBuf,
    /// Tags shown next to the path
    pub tags: BTreeSet<String>,
    /// The path did not exist as a directory when the index was built
    pub stale: bool,
    /// Declared or scanned
    pub source: EntrySource,
}

impl Entry {
    /// Create an entry from a declared config item, expanding `~`
    #[must_use]
    pub fn declared(config: &EntryConfig) -> Self {
        let path = expand_tilde(&config.path);
        Self {
            label: config.display_label(),
            stale: !path.is_dir(),
            path,
            tags: config.tags.clone(),
            source: EntrySource::Declared,
        }
    }

    fn scanned(dir: ScannedDir, root: &RootConfig) -> Self {
        Self {
            label: dir.label,
            path: dir.path,
            tags: root.tags.clone(),
            stale: false,
            source: EntrySource::Scanned,
        }
    }
}

/// Which field of an entry produced the best match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    Label,
    Path,
}

/// An entry that survived filtering, with its ranking data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// The matching entry
    pub entry: Entry,
    /// Position of the entry in the index (insertion order)
    pub order: usize,
    /// Best tier across label and path
    pub tier: MatchTier,
    /// Gap count of the best match
    pub gaps: usize,
    /// Field the best match came from
    pub field: MatchedField,
    /// Matched character positions in the label, for highlighting
    pub label_positions: Vec<u32>,
}

/// Ordered collection of selectable entries
#[derive(Debug, Default)]
pub struct EntryIndex {
    entries: Vec<Entry>,
    matcher: QueryMatcher,
}

impl EntryIndex {
    /// Build the index from declared entries plus scans of `live_scan_roots`
    ///
    /// Pass `&config.roots` to scan, or an empty slice to skip scanning.
    #[must_use]
    pub fn build(config: &QsConfig, live_scan_roots: &[RootConfig]) -> Self {
        let mut entries: Vec<Entry> = config.entries.iter().map(Entry::declared).collect();

        let mut scanner = Scanner::new();
        for root in live_scan_roots {
            entries.extend(
                scanner
                    .scan(root)
                    .into_iter()
                    .map(|dir| Entry::scanned(dir, root)),
            );
        }

        Self::from_entries(entries)
    }

    /// Build the index from ready-made entries, collapsing duplicate paths
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut kept = Vec::new();

        for entry in entries {
            if entry.path.as_os_str().is_empty() {
                tracing::debug!(label = %entry.label, "dropping entry with empty path");
                continue;
            }
            if seen.insert(entry.path.clone()) {
                kept.push(entry);
            } else {
                tracing::debug!(
                    label = %entry.label,
                    path = %entry.path.display(),
                    "duplicate path, keeping first entry"
                );
            }
        }

        let stale = kept.iter().filter(|e| e.stale).count();
        tracing::debug!(entries = kept.len(), stale, "built entry index");

        Self {
            entries: kept,
            matcher: QueryMatcher::new(),
        }
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filter and rank entries against `query`
    ///
    /// An empty query returns every entry in insertion order.
    pub fn filter(&mut self, query: &str) -> Vec<Hit> {
        let query = Query::new(query);
        let mut hits = Vec::new();

        for (order, entry) in self.entries.iter().enumerate() {
            let label_match = self.matcher.match_field(&query, &entry.label);
            let path_match = self
                .matcher
                .match_field(&query, &entry.path.to_string_lossy());

            let (field, best) = match (&label_match, path_match) {
                (Some(label), Some(path)) if path.rank() < label.rank() => {
                    (MatchedField::Path, path)
                }
                (Some(label), _) => (MatchedField::Label, label.clone()),
                (None, Some(path)) => (MatchedField::Path, path),
                (None, None) => continue,
            };

            hits.push(Hit {
                entry: entry.clone(),
                order,
                tier: best.tier,
                gaps: best.gaps,
                field,
                label_positions: label_match.map(|m| m.positions).unwrap_or_default(),
            });
        }

        hits.sort_by_key(|hit| (hit.tier, hit.gaps, hit.order));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(label: &str, path: &str) -> Entry {
        Entry {
            label: label.to_string(),
            path: PathBuf::from(path),
            tags: BTreeSet::new(),
            stale: false,
            source: EntrySource::Declared,
        }
    }

    fn labels(hits: &[Hit]) -> Vec<&str> {
        hits.iter().map(|h| h.entry.label.as_str()).collect()
    }

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let haystack = haystack.to_lowercase();
        let mut chars = haystack.chars();
        needle
            .to_lowercase()
            .chars()
            .all(|c| chars.by_ref().any(|h| h == c))
    }

    #[test]
    fn test_duplicate_paths_keep_first_label() {
        let index = EntryIndex::from_entries([
            entry("first", "/srv/a"),
            entry("second", "/srv/b"),
            entry("again", "/srv/a/"),
        ]);
        let labels: Vec<_> = index.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_query_keeps_insertion_order() {
        let mut index = EntryIndex::from_entries([
            entry("zulu", "/z"),
            entry("alpha", "/a"),
            entry("mike", "/m"),
        ]);
        assert_eq!(labels(&index.filter("")), vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_proj_scenario() {
        let mut index = EntryIndex::from_entries([
            entry("proj-a", "/home/u/proj-a"),
            entry("proj-b", "/home/u/proj-b"),
        ]);
        let hits = index.filter("a");
        assert_eq!(labels(&hits), vec!["proj-a"]);
        assert_eq!(hits[0].entry.path, PathBuf::from("/home/u/proj-a"));

        assert!(index.filter("zzz").is_empty());
    }

    #[test]
    fn test_ranking_tiers_then_order() {
        let mut index = EntryIndex::from_entries([
            entry("my-notes", "/x/1"),     // substring
            entry("n-o-t-e-s", "/x/2"),    // subsequence, many gaps
            entry("notes", "/x/3"),        // prefix
            entry("no-tes", "/x/4"),       // subsequence, one gap
            entry("old-notes", "/x/5"),    // substring, later
        ]);
        let hits = index.filter("notes");
        assert_eq!(
            labels(&hits),
            vec!["notes", "my-notes", "old-notes", "no-tes", "n-o-t-e-s"]
        );
        assert_eq!(hits[0].tier, MatchTier::Prefix);
        assert_eq!(hits[3].gaps, 1);
    }

    #[test]
    fn test_equal_gaps_fall_back_to_insertion_order() {
        // scattered "a/b/c" is a decoy; "zab..c" has a single gap
        let mut index = EntryIndex::from_entries([
            entry("a/b/c-zabzc", "/x/1"),
            entry("abxxc", "/x/2"),
        ]);
        let hits = index.filter("abc");
        assert_eq!(labels(&hits), vec!["a/b/c-zabzc", "abxxc"]);
        assert_eq!(hits[0].gaps, 1);
        assert_eq!(hits[1].gaps, 1);
        assert_eq!(hits[0].label_positions, vec![7, 8, 10]);
    }

    #[test]
    fn test_path_match_counts() {
        let mut index = EntryIndex::from_entries([
            entry("api", "/srv/backend/api"),
            entry("web", "/srv/frontend/web"),
        ]);
        let hits = index.filter("backend");
        assert_eq!(labels(&hits), vec!["api"]);
        assert_eq!(hits[0].field, MatchedField::Path);
        assert_eq!(hits[0].tier, MatchTier::Substring);
        assert!(hits[0].label_positions.is_empty());
    }

    #[test]
    fn test_every_hit_is_subsequence_and_prefix_first() {
        let mut index = EntryIndex::from_entries([
            entry("dotfiles", "/home/u/.config"),
            entry("Downloads", "/home/u/Downloads"),
            entry("docs", "/home/u/work/docs"),
            entry("rust-book", "/home/u/src/rust-book"),
            entry("old-docs", "/archive/docs-old"),
        ]);

        for query in ["do", "D", "dcs", "rb", "u/", "ok", "xyz"] {
            let hits = index.filter(query);
            for hit in &hits {
                assert!(
                    is_subsequence(query, &hit.entry.label)
                        || is_subsequence(query, &hit.entry.path.to_string_lossy()),
                    "{query:?} is not a subsequence of {:?}",
                    hit.entry
                );
            }
            let first_non_prefix = hits
                .iter()
                .position(|h| h.tier != MatchTier::Prefix)
                .unwrap_or(hits.len());
            assert!(hits[first_non_prefix..].iter().all(|h| h.tier != MatchTier::Prefix));
        }
    }

    #[test]
    fn test_build_merges_declared_and_scanned() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("alpha")).unwrap();
        std::fs::create_dir_all(tmp.path().join("beta")).unwrap();

        let mut config = QsConfig::default();
        config.entries = vec![
            EntryConfig::new("pinned-beta", tmp.path().join("beta")),
            EntryConfig::new("gone", tmp.path().join("missing")),
        ];
        let mut root = RootConfig::new(tmp.path());
        root.tags.insert("scan".to_string());
        config.roots = vec![root];

        let index = EntryIndex::build(&config, &config.roots);
        let labels: Vec<_> = index.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["pinned-beta", "gone", "alpha"]);

        assert!(!index.entries()[0].stale);
        assert!(index.entries()[1].stale);
        assert_eq!(index.entries()[2].source, EntrySource::Scanned);
        assert!(index.entries()[2].tags.contains("scan"));

        let declared_only = EntryIndex::build(&config, &[]);
        assert_eq!(declared_only.len(), 2);
    }
}
