// src/discovery.rs
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::lang::Lang;

/// A file found under the root whose extension maps to a known language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    pub path: PathBuf,
    /// Root-relative, `/`-separated node id.
    pub id: String,
    pub lang: Lang,
}

/// Walks `root` in file-name order, pruning VCS and tool directories.
///
/// Unknown extensions and excluded paths are skipped silently.
///
/// # Errors
/// Returns `Walk` if any directory entry cannot be read.
pub fn discover(root: &Path, config: &Config) -> Result<Vec<Discovered>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !(e.file_type().is_dir()
                    && config.should_skip_dir(&e.file_name().to_string_lossy()))
        });

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(lang) = Lang::from_path(entry.path()) else {
            continue;
        };
        let id = node_id(root, entry.path());
        if config.is_excluded(&id) {
            debug!(file = %id, "excluded by config");
            continue;
        }
        found.push(Discovered {
            path: entry.path().to_path_buf(),
            id,
            lang,
        });
    }
    Ok(found)
}

/// Normalizes a path under `root` to a `/`-separated relative id.
#[must_use]
pub fn node_id(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_prunes_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("pkg")).unwrap();
        fs::write(root.join(".git/hook.go"), "package hook").unwrap();
        fs::write(root.join("pkg/a.go"), "package pkg").unwrap();
        fs::write(root.join("README.md"), "# readme").unwrap();
        fs::write(root.join("main.go"), "package main").unwrap();

        let found = discover(root, &Config::new()).unwrap();
        let ids: Vec<_> = found.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["main.go", "pkg/a.go"]);
    }

    #[test]
    fn test_node_id_is_relative() {
        let id = node_id(Path::new("/repo"), Path::new("/repo/internal/foo/foo.go"));
        assert_eq!(id, "internal/foo/foo.go");
    }
}
