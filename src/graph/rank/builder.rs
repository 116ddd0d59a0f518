// src/graph/rank/builder.rs
//! Graph construction at file granularity.

use std::collections::HashSet;

use super::graph::DependencyGraph;
use crate::graph::imports::NodeImport;
use crate::graph::package_index::PackagePathIndex;

/// Builds the graph from every scanned file id and their imports.
///
/// A reference that already names a scanned file is kept as is. A package
/// key known to the index becomes one reference per file of that package.
/// Anything else stays as an opaque node. Self references are dropped.
///
/// `files` is authoritative: an indexed file missing from it was dropped
/// from the run and is never a node, whether it is named directly or
/// reached through its package.
#[must_use]
pub fn build(
    files: &[String],
    imports: &[NodeImport],
    index: &PackagePathIndex,
) -> DependencyGraph {
    let known: HashSet<&str> = files.iter().map(String::as_str).collect();
    let dropped: HashSet<&str> = index.files().filter(|f| !known.contains(f)).collect();
    let mut graph = DependencyGraph::new();

    for file in files {
        graph.add_node(file);
    }

    let resolved: Vec<NodeImport> = imports
        .iter()
        .flat_map(|import| resolve_to_files(import, &known, &dropped, index))
        .collect();
    graph.build_from_imports(&resolved);

    graph
}

fn resolve_to_files(
    import: &NodeImport,
    known: &HashSet<&str>,
    dropped: &HashSet<&str>,
    index: &PackagePathIndex,
) -> Vec<NodeImport> {
    let target = import.referenced_package.as_str();

    let targets: Vec<&str> = if known.contains(target) {
        vec![target]
    } else if dropped.contains(target) {
        Vec::new()
    } else if let Some(files) = index.files_for(target) {
        files
            .iter()
            .map(String::as_str)
            .filter(|f| known.contains(f))
            .collect()
    } else {
        vec![target]
    };

    targets
        .into_iter()
        .filter(|t| *t != import.source_file)
        .map(|t| NodeImport::new(import.source_file.clone(), t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_package_key_expands_to_files() {
        let mut index = PackagePathIndex::new();
        index.insert("helper", "helper/a.go");
        index.insert("helper", "helper/b.go");

        let files = ids(&["main.go", "helper/a.go", "helper/b.go"]);
        let imports = vec![NodeImport::new("main.go", "helper")];
        let graph = build(&files, &imports, &index);

        assert_eq!(graph.outgoing_of("helper/a.go"), ["main.go".to_string()]);
        assert_eq!(graph.outgoing_of("helper/b.go"), ["main.go".to_string()]);
        assert!(!graph.contains("helper"));
    }

    #[test]
    fn test_unresolved_key_is_opaque_node() {
        let files = ids(&["main.go"]);
        let imports = vec![NodeImport::new("main.go", "cmd")];
        let graph = build(&files, &imports, &PackagePathIndex::new());

        assert_eq!(graph.outgoing_of("cmd"), ["main.go".to_string()]);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_isolated_files_are_nodes() {
        let files = ids(&["a.go", "b.py"]);
        let graph = build(&files, &[], &PackagePathIndex::new());
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_reference_dropped() {
        let mut index = PackagePathIndex::new();
        index.insert("util", "util/a.go");
        index.insert("util", "util/b.go");

        let files = ids(&["util/a.go", "util/b.go"]);
        let imports = vec![NodeImport::new("util/a.go", "util")];
        let graph = build(&files, &imports, &index);

        assert_eq!(graph.outgoing_of("util/b.go"), ["util/a.go".to_string()]);
        assert!(graph.outgoing_of("util/a.go").is_empty());
    }

    #[test]
    fn test_dropped_files_never_become_nodes() {
        let mut index = PackagePathIndex::new();
        index.insert("legacy", "legacy/old.go");
        index.insert("store", "store/db.go");
        index.insert("store", "store/broken.go");

        let files = ids(&["main.go", "store/db.go"]);
        let imports = vec![
            NodeImport::new("main.go", "legacy"),
            NodeImport::new("main.go", "legacy/old.go"),
            NodeImport::new("main.go", "store"),
            NodeImport::new("main.go", "store/broken.go"),
        ];
        let graph = build(&files, &imports, &index);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains("legacy"));
        assert!(!graph.contains("legacy/old.go"));
        assert!(!graph.contains("store/broken.go"));
        assert_eq!(graph.outgoing_of("store/db.go"), ["main.go".to_string()]);
    }
}
