// src/graph/rank/graph.rs
//! The dependency graph structure and query interface.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::imports::NodeImport;

/// Directed graph over opaque node ids.
///
/// Every id that appears as an edge endpoint is also a key, possibly with an
/// empty list, so degree accounting in the ranker sees all nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `id` exists as a node.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    /// Appends `dst` to `src`'s outgoing list unless already present.
    pub fn add_edge(&mut self, src: &str, dst: &str) {
        self.add_node(dst);
        let outgoing = self.adjacency.entry(src.to_string()).or_default();
        if !outgoing.iter().any(|n| n == dst) {
            outgoing.push(dst.to_string());
        }
    }

    /// Outgoing neighbours in insertion order; empty for unknown nodes.
    #[must_use]
    pub fn outgoing_of(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Nodes with an edge into `node`, found by scanning every list.
    #[must_use]
    pub fn incoming_of(&self, node: &str) -> Vec<String> {
        self.adjacency
            .iter()
            .filter(|(_, outs)| outs.iter().any(|n| n == node))
            .map(|(src, _)| src.clone())
            .collect()
    }

    /// Folds imports into edges running from the referenced package to the
    /// file that references it.
    pub fn build_from_imports(&mut self, imports: &[NodeImport]) {
        for import in imports {
            self.add_edge(&import.referenced_package, &import.source_file);
        }
    }

    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Nodes and their outgoing lists, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.adjacency.iter()
    }
}
