// tests/unit_graph.rs
//! Graph construction and ranking through the public API.

use wingman_core::graph::imports::NodeImport;
use wingman_core::graph::rank::{builder, pagerank, queries, DependencyGraph, GraphEngine};
use wingman_core::graph::PackagePathIndex;

fn sum(scores: &wingman_core::graph::ScoreTable) -> f64 {
    scores.values().sum()
}

#[test]
fn test_import_list_direction() {
    let imports = vec![
        NodeImport::new("cmd/main.go", "store"),
        NodeImport::new("cmd/main.go", "config"),
    ];
    let mut graph = DependencyGraph::new();
    graph.build_from_imports(&imports);

    let mut incoming = graph.incoming_of("cmd/main.go");
    incoming.sort();
    assert_eq!(incoming, vec!["config".to_string(), "store".to_string()]);
    assert!(graph.outgoing_of("store").contains(&"cmd/main.go".to_string()));
    assert!(graph.outgoing_of("cmd/main.go").is_empty());
}

#[test]
fn test_chain_ranks_last_highest() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");

    let scores = pagerank::compute(&graph);
    assert!(scores["c"] > scores["b"]);
    assert!(scores["b"] > scores["a"]);
    assert!((sum(&scores) - 1.0).abs() <= 1e-6);
}

#[test]
fn test_empty_graph_yields_nothing() {
    let graph = DependencyGraph::new();
    assert!(pagerank::compute(&graph).is_empty());
    assert!(GraphEngine::rank(&graph).is_empty());
}

#[test]
fn test_dangling_and_isolated_nodes() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("lib", "app");
    graph.add_node("island");

    let scores = pagerank::compute(&graph);
    assert_eq!(scores.len(), 3);
    for value in scores.values() {
        assert!(value.is_finite() && *value >= 0.0);
    }
    assert!((sum(&scores) - 1.0).abs() <= 1e-6);
}

#[test]
fn test_ranked_order_ties_by_id() {
    let mut graph = DependencyGraph::new();
    graph.add_node("zeta.go");
    graph.add_node("alpha.go");
    graph.add_node("mid.go");

    let ids: Vec<String> = GraphEngine::rank(&graph).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["alpha.go", "mid.go", "zeta.go"]);
}

#[test]
fn test_builder_expands_package_to_files() {
    let mut index = PackagePathIndex::new();
    index.insert("store", "internal/store/db.go");
    index.insert("store", "internal/store/cache.go");

    let files = vec![
        "cmd/main.go".to_string(),
        "internal/store/db.go".to_string(),
        "internal/store/cache.go".to_string(),
    ];
    let imports = vec![
        NodeImport::new("cmd/main.go", "store"),
        NodeImport::new("cmd/main.go", "internal/store/db.go"),
        NodeImport::new("cmd/main.go", "metrics"),
    ];

    let graph = builder::build(&files, &imports, &index);

    assert_eq!(graph.len(), 4, "three files plus the opaque `metrics` node");
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.contains("metrics"));
    assert_eq!(graph.outgoing_of("internal/store/db.go"), ["cmd/main.go".to_string()]);

    let ranked = queries::ranked_nodes(&pagerank::compute(&graph));
    assert_eq!(ranked[0].0, "cmd/main.go");
}
