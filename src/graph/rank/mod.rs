// src/graph/rank/mod.rs
pub mod builder;
pub mod graph;
pub mod pagerank;
pub mod queries;

use std::collections::BTreeMap;

pub use graph::DependencyGraph;

/// Node id -> importance, summing to ~1.0 over a non-empty graph.
pub type ScoreTable = BTreeMap<String, f64>;

/// Orchestrates ranking over a finished graph.
pub struct GraphEngine;

impl GraphEngine {
    /// Scores every node and returns them in ranked order.
    #[must_use]
    pub fn rank(graph: &DependencyGraph) -> Vec<(String, f64)> {
        let scores = pagerank::compute(graph);
        queries::ranked_nodes(&scores)
    }
}
