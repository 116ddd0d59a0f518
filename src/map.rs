// src/map.rs
//! Terminal rendering of a ranked context map.

use std::fmt::Write;

use colored::Colorize;

use crate::context::{ContextMap, RankedFile};

/// Renders `map`, keeping the first `limit` entries when given.
#[must_use]
pub fn render(map: &ContextMap, limit: Option<usize>) -> String {
    let mut out = format!(
        "# Context Map {}\n",
        map.root.display().to_string().blue().bold()
    );
    let _ = writeln!(
        out,
        "{}\n",
        format!("{} nodes, {} edges", map.node_count, map.edge_count).dimmed()
    );

    let shown = limit.unwrap_or(map.entries.len()).min(map.entries.len());
    for (rank, entry) in map.entries.iter().take(shown).enumerate() {
        write_entry(&mut out, rank + 1, entry);
    }

    let hidden = map.entries.len() - shown;
    if hidden > 0 {
        let _ = writeln!(out, "{}", format!("... {hidden} more files").dimmed());
    }

    if !map.failures.is_empty() {
        let _ = writeln!(out, "\n{}", "Skipped:".yellow().bold());
        for failure in &map.failures {
            let _ = writeln!(out, "  {} {}", failure.id.yellow(), failure.error.dimmed());
        }
    }

    out
}

fn write_entry(out: &mut String, rank: usize, entry: &RankedFile) {
    let score = format!("[{:.4}]", entry.score).dimmed();
    let _ = writeln!(out, "{rank:>4}. {} {score}", entry.id.bold());
    for sig in &entry.signatures {
        let _ = writeln!(out, "        {sig}");
    }
}
