// src/graph/imports/mod.rs
//! Per-language extraction of internal (same-module) references.

pub mod golang;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::graph::package_index::PackagePathIndex;
use crate::lang::Lang;
use crate::source::SourceFile;

pub use golang::GolangStrategy;

/// One directed reference: `source_file` depends on `referenced_package`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeImport {
    pub source_file: String,
    pub referenced_package: String,
}

impl NodeImport {
    #[must_use]
    pub fn new(source_file: impl Into<String>, referenced_package: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            referenced_package: referenced_package.into(),
        }
    }
}

/// Extracts internal references from one file. External and third-party
/// references are dropped.
pub trait ImportStrategy: Send + Sync {
    /// # Errors
    /// Returns an error if the file cannot be parsed or its module context
    /// cannot be resolved.
    fn extract(&self, file: &SourceFile, index: &PackagePathIndex) -> Result<Vec<NodeImport>>;
}

/// Languages without import support. Yields nothing and never fails.
pub struct NoopStrategy;

impl ImportStrategy for NoopStrategy {
    fn extract(&self, _file: &SourceFile, _index: &PackagePathIndex) -> Result<Vec<NodeImport>> {
        Ok(Vec::new())
    }
}

/// Language -> strategy table, built once per engine.
pub struct StrategyRegistry {
    strategies: HashMap<Lang, Arc<dyn ImportStrategy>>,
    fallback: Arc<dyn ImportStrategy>,
}

impl StrategyRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            strategies: HashMap::new(),
            fallback: Arc::new(NoopStrategy),
        };
        registry.register(Lang::Go, Arc::new(GolangStrategy));
        registry
    }

    pub fn register(&mut self, lang: Lang, strategy: Arc<dyn ImportStrategy>) {
        self.strategies.insert(lang, strategy);
    }

    #[must_use]
    pub fn get(&self, lang: Lang) -> &dyn ImportStrategy {
        self.strategies
            .get(&lang)
            .map_or(self.fallback.as_ref(), |s| s.as_ref())
    }

    /// Runs the strategy registered for the file's language.
    ///
    /// # Errors
    /// Propagates the strategy's error.
    pub fn extract(&self, file: &SourceFile, index: &PackagePathIndex) -> Result<Vec<NodeImport>> {
        self.get(file.lang).extract(file, index)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_is_empty() {
        let registry = StrategyRegistry::new();
        let file = SourceFile::new("lib.rs", "lib.rs", Lang::Rust, b"use crate::x;".to_vec());
        let imports = registry.extract(&file, &PackagePathIndex::new()).unwrap();
        assert!(imports.is_empty());
    }
}
