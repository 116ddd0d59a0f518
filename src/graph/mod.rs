// src/graph/mod.rs
pub mod imports;
pub mod module;
pub mod package_index;
pub mod rank;

pub use imports::{ImportStrategy, NodeImport, StrategyRegistry};
pub use module::ModuleDescriptor;
pub use package_index::PackagePathIndex;
pub use rank::{DependencyGraph, ScoreTable};
