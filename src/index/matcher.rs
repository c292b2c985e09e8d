//! Query matching and ranking tiers
//!
//! A candidate string matches when the query is a case-insensitive
//! subsequence of it. Matches are ranked by tier (prefix, then contiguous
//! substring, then scattered subsequence) and, within the subsequence tier,
//! by the fewest gaps any alignment of the query can have. nucleo decides
//! whether a candidate matches at all; the gap count comes from a small
//! dynamic program over (query char, haystack char).

use nucleo::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo::{Config, Matcher, Utf32Str};
use std::fmt;

/// How well a query matched, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Candidate starts with the query
    Prefix,
    /// Candidate contains the query contiguously
    Substring,
    /// Query characters appear in order with gaps between them
    Subsequence,
}

/// A successful match against one string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Ranking tier
    pub tier: MatchTier,
    /// Number of breaks between matched runs (0 for prefix/substring)
    pub gaps: usize,
    /// Character positions of the matched query characters, ascending
    pub positions: Vec<u32>,
}

impl FieldMatch {
    /// Sort key: lower is better
    #[must_use]
    pub const fn rank(&self) -> (MatchTier, usize) {
        (self.tier, self.gaps)
    }
}

/// A parsed query, reusable across all candidates for one keystroke
#[derive(Debug, Clone)]
pub struct Query {
    lowered: String,
    chars: Vec<char>,
    char_len: u32,
    atom: Atom,
}

impl Query {
    /// Prepare a query; the text is taken literally (no operators)
    #[must_use]
    pub fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let chars: Vec<char> = text.chars().map(fold_case).collect();
        #[allow(clippy::cast_possible_truncation)]
        let char_len = lowered.chars().count() as u32;
        let atom = Atom::new(
            text,
            CaseMatching::Ignore,
            Normalization::Never,
            AtomKind::Fuzzy,
            false,
        );
        Self {
            lowered,
            chars,
            char_len,
            atom,
        }
    }

    /// Whether the query matches everything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

const UNREACHABLE: usize = usize::MAX;

/// Alignment of `query` in `haystack` with the fewest breaks between runs
///
/// `cost[j * m + i]` is the fewest gaps of an alignment of `query[..=j]`
/// whose last char sits at `haystack[i]`.
fn fewest_gaps(query: &[char], haystack: &[char]) -> Option<(usize, Vec<u32>)> {
    let (n, m) = (query.len(), haystack.len());
    if n == 0 || n > m {
        return None;
    }

    let mut cost = vec![UNREACHABLE; n * m];
    for (i, &h) in haystack.iter().enumerate() {
        if h == query[0] {
            cost[i] = 0;
        }
    }
    for j in 1..n {
        let (done, rest) = cost.split_at_mut(j * m);
        let prev = &done[(j - 1) * m..];
        let cur = &mut rest[..m];
        // fewest gaps ending anywhere before i - 1
        let mut best_before = UNREACHABLE;
        for i in 1..m {
            if haystack[i] == query[j] {
                cur[i] = prev[i - 1].min(best_before.saturating_add(1));
            }
            best_before = best_before.min(prev[i - 1]);
        }
    }

    let (mut i, gaps) = cost[(n - 1) * m..]
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, c)| c != UNREACHABLE)
        .min_by_key(|&(_, c)| c)?;

    let mut positions = vec![0u32; n];
    let mut remaining = gaps;
    for j in (0..n).rev() {
        #[allow(clippy::cast_possible_truncation)]
        {
            positions[j] = i as u32;
        }
        if j == 0 {
            break;
        }
        let prev = &cost[(j - 1) * m..j * m];
        if prev[i - 1] == remaining {
            i -= 1;
        } else {
            remaining -= 1;
            i = (0..i - 1).rev().find(|&k| prev[k] == remaining)?;
        }
    }
    Some((gaps, positions))
}

/// Stateful matcher holding nucleo's scratch buffers
pub struct QueryMatcher {
    matcher: Matcher,
    chars: Vec<char>,
    folded: Vec<char>,
}

impl fmt::Debug for QueryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryMatcher").finish_non_exhaustive()
    }
}

impl Default for QueryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryMatcher {
    /// Create a matcher tuned for path-like haystacks
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT.match_paths()),
            chars: Vec::new(),
            folded: Vec::new(),
        }
    }

    /// Match `query` against `haystack`, returning its tier and positions
    pub fn match_field(&mut self, query: &Query, haystack: &str) -> Option<FieldMatch> {
        if query.is_empty() {
            return Some(FieldMatch {
                tier: MatchTier::Prefix,
                gaps: 0,
                positions: Vec::new(),
            });
        }

        let lowered = haystack.to_lowercase();
        if lowered.starts_with(&query.lowered) {
            return Some(FieldMatch {
                tier: MatchTier::Prefix,
                gaps: 0,
                positions: (0..query.char_len).collect(),
            });
        }
        if let Some(byte_idx) = lowered.find(&query.lowered) {
            #[allow(clippy::cast_possible_truncation)]
            let start = lowered[..byte_idx].chars().count() as u32;
            return Some(FieldMatch {
                tier: MatchTier::Substring,
                gaps: 0,
                positions: (start..start + query.char_len).collect(),
            });
        }

        query
            .atom
            .score(Utf32Str::new(haystack, &mut self.chars), &mut self.matcher)?;

        self.folded.clear();
        self.folded.extend(haystack.chars().map(fold_case));
        let (gaps, positions) = fewest_gaps(&query.chars, &self.folded)?;

        Some(FieldMatch {
            tier: MatchTier::Subsequence,
            gaps,
            positions,
        })
    }
}
