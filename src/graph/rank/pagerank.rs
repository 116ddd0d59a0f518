// src/graph/rank/pagerank.rs
//! `PageRank` over a [`DependencyGraph`] snapshot.

use std::collections::HashMap;

use super::graph::DependencyGraph;
use super::ScoreTable;

const DAMPING: f64 = 0.85;
const ITERATIONS: usize = 50;

/// Computes `PageRank` scores for every node in the graph.
///
/// Runs a fixed number of power iterations from a uniform prior. Mass held
/// by nodes without outgoing edges is spread uniformly each round, so the
/// result stays a probability distribution. An empty graph yields an empty
/// table.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &DependencyGraph) -> ScoreTable {
    if graph.is_empty() {
        return ScoreTable::new();
    }

    let (ids, outgoing) = index_graph(graph);
    let n = ids.len() as f64;
    let mut ranks = vec![1.0 / n; ids.len()];
    let mut next = vec![0.0; ids.len()];

    for _ in 0..ITERATIONS {
        iterate_once(&ranks, &mut next, &outgoing, n);
        std::mem::swap(&mut ranks, &mut next);
    }

    ids.into_iter()
        .map(str::to_string)
        .zip(ranks)
        .collect()
}

/// Dense node positions and adjacency, in the graph's id order.
fn index_graph(graph: &DependencyGraph) -> (Vec<&str>, Vec<Vec<usize>>) {
    let ids: Vec<&str> = graph.iter().map(|(id, _)| id.as_str()).collect();
    let position: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    let outgoing = graph
        .iter()
        .map(|(_, outs)| {
            outs.iter()
                .filter_map(|dst| position.get(dst.as_str()).copied())
                .collect()
        })
        .collect();

    (ids, outgoing)
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once(ranks: &[f64], next: &mut [f64], outgoing: &[Vec<usize>], n: f64) {
    next.fill((1.0 - DAMPING) / n);

    let dangling: f64 = outgoing
        .iter()
        .zip(ranks)
        .filter(|(outs, _)| outs.is_empty())
        .map(|(_, r)| r)
        .sum();

    for (outs, rank) in outgoing.iter().zip(ranks) {
        if outs.is_empty() {
            continue;
        }
        let share = DAMPING * rank / outs.len() as f64;
        for &dst in outs {
            next[dst] += share;
        }
    }

    let spread = DAMPING * dangling / n;
    for value in next.iter_mut() {
        *value += spread;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(scores: &ScoreTable) -> f64 {
        scores.values().sum()
    }

    fn assert_distribution(scores: &ScoreTable) {
        for (id, v) in scores {
            assert!(v.is_finite(), "score for {id} not finite: {v}");
            assert!(*v >= 0.0, "score for {id} negative: {v}");
        }
        assert!((total(scores) - 1.0).abs() <= 1e-6, "sum was {}", total(scores));
    }

    #[test]
    fn test_empty_graph() {
        let scores = compute(&DependencyGraph::new());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_single_node() {
        let mut g = DependencyGraph::new();
        g.add_node("only");
        let scores = compute(&g);
        assert!((scores["only"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_chain_sink_dominates() {
        let mut g = DependencyGraph::new();
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        let scores = compute(&g);

        assert_distribution(&scores);
        assert!(scores["C"] > scores["B"], "{scores:?}");
        assert!(scores["B"] > scores["A"], "{scores:?}");
    }

    #[test]
    fn test_dangling_and_disconnected() {
        let mut g = DependencyGraph::new();
        g.add_edge("A", "B");
        g.add_node("C");
        let scores = compute(&g);

        assert_eq!(scores.len(), 3);
        assert_distribution(&scores);
    }

    #[test]
    fn test_cycle_is_uniform() {
        let mut g = DependencyGraph::new();
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.add_edge("C", "A");
        let scores = compute(&g);

        assert_distribution(&scores);
        for v in scores.values() {
            assert!((v - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hub_outranks_leaves() {
        let mut g = DependencyGraph::new();
        for leaf in ["a", "b", "c", "d"] {
            g.add_edge(leaf, "hub");
        }
        let scores = compute(&g);

        assert_distribution(&scores);
        assert!(scores["hub"] > scores["a"]);
    }
}
