// src/graph/package_index.rs
//! Declared package name -> files declaring it.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackagePathIndex {
    packages: BTreeMap<String, BTreeSet<String>>,
}

impl PackagePathIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, package: impl Into<String>, file: impl Into<String>) {
        self.packages
            .entry(package.into())
            .or_default()
            .insert(file.into());
    }

    #[must_use]
    pub fn files_for(&self, package: &str) -> Option<&BTreeSet<String>> {
        self.packages.get(package)
    }

    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    #[must_use]
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Every registered file, across all packages.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.packages.values().flatten().map(String::as_str)
    }
}

/// Finds the `package <name>` clause of a Go source file, skipping leading
/// comments and blank lines.
#[must_use]
pub fn declared_package(source: &str) -> Option<String> {
    let mut in_block = false;

    for line in source.lines() {
        let mut rest = line.trim();

        if in_block {
            let Some(end) = rest.find("*/") else {
                continue;
            };
            rest = rest[end + 2..].trim_start();
            in_block = false;
        }

        while let Some(after) = rest.strip_prefix("/*") {
            match after.find("*/") {
                Some(end) => rest = after[end + 2..].trim_start(),
                None => {
                    in_block = true;
                    rest = "";
                }
            }
        }

        if rest.is_empty() || rest.starts_with("//") {
            continue;
        }

        let mut parts = rest.split_whitespace();
        return match (parts.next(), parts.next()) {
            (Some("package"), Some(name)) => Some(name.trim_end_matches(';').to_string()),
            _ => None,
        };
    }

    None
}
