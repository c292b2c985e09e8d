//! List command - print entries without opening the picker

use crate::config::{QsConfig, RootConfig};
use crate::index::{Entry, EntryIndex};
use crate::Result;
use std::io::Write;

/// Execute the list command
///
/// With a query, entries are printed in ranked order; otherwise in index
/// order. Text output is one `label<TAB>path` line per entry, with tags
/// appended as a third column when present.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn execute(
    config: &QsConfig,
    query: Option<&str>,
    json: bool,
    scan: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let roots: &[RootConfig] = if scan { &config.roots } else { &[] };
    let mut index = EntryIndex::build(config, roots);

    let entries: Vec<Entry> = match query {
        Some(query) => index.filter(query).into_iter().map(|hit| hit.entry).collect(),
        None => index.entries().to_vec(),
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &entries {
        write!(out, "{}\t{}", entry.label, entry.path.display())?;
        if !entry.tags.is_empty() {
            let tags: Vec<&str> = entry.tags.iter().map(String::as_str).collect();
            write!(out, "\t{}", tags.join(","))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
