// src/graph/rank/queries.rs
use std::cmp::Ordering;

use super::ScoreTable;

/// Nodes by descending score; equal scores fall back to ascending id so the
/// order is stable across runs.
#[must_use]
pub fn ranked_nodes(scores: &ScoreTable) -> Vec<(String, f64)> {
    let mut ranked: Vec<_> = scores.iter().map(|(id, s)| (id.clone(), *s)).collect();
    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked(a: &(String, f64), b: &(String, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_with_tie_break() {
        let scores: ScoreTable = [
            ("b.go".to_string(), 0.25),
            ("a.go".to_string(), 0.25),
            ("c.go".to_string(), 0.5),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = ranked_nodes(&scores).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["c.go", "a.go", "b.go"]);
    }
}
