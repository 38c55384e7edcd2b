/// Redundancy pruning over candidate comparisons.
///
/// The central optimality device: a pair whose ordering already follows from
/// recorded judgments (in either direction) is removed, so the user is never
/// asked a question whose answer is implied. Must run over the full pending
/// set after every accepted judgment — one new edge can transitively resolve
/// many unrelated pairs.
use crate::graph::OrderGraph;
use crate::types::Comparison;

/// Keep only the candidates whose outcome is not implied by reachability:
/// (a, b) survives iff neither `has_path(a, b)` nor `has_path(b, a)`.
pub fn prune(candidates: &[Comparison], graph: &OrderGraph) -> Vec<Comparison> {
    candidates
        .iter()
        .filter(|c| !graph.has_path(c.first(), c.second()) && !graph.has_path(c.second(), c.first()))
        .cloned()
        .collect()
}

/// Drop candidates present in `skipped`, in either orientation (canonical
/// `Comparison` identity is already order-independent).
pub fn filter_skipped(candidates: &[Comparison], skipped: &[Comparison]) -> Vec<Comparison> {
    candidates
        .iter()
        .filter(|c| !skipped.contains(c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::all_pairs;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prune_removes_implied_pairs_both_directions() {
        let names = items(&["A", "B", "C"]);
        let mut g = OrderGraph::with_items(&names).unwrap();
        g.add_edge("A", "B").unwrap();
        g.add_edge("B", "C").unwrap();

        let survivors = prune(&all_pairs(&names), &g);
        // A-vs-B and B-vs-C are recorded; A-vs-C is implied transitively.
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_prune_keeps_unrelated_pair() {
        let names = items(&["A", "B", "C"]);
        let mut g = OrderGraph::with_items(&names).unwrap();
        g.add_edge("A", "B").unwrap();
        g.add_edge("A", "C").unwrap();

        let survivors = prune(&all_pairs(&names), &g);
        // No path between B and C in either direction — must still be asked.
        assert_eq!(survivors, vec![Comparison::new("B", "C")]);
    }

    #[test]
    fn test_prune_empty_graph_keeps_everything() {
        let names = items(&["A", "B", "C", "D"]);
        let g = OrderGraph::with_items(&names).unwrap();
        let pairs = all_pairs(&names);
        assert_eq!(prune(&pairs, &g), pairs);
    }

    #[test]
    fn test_filter_skipped_orientation_independent() {
        let pairs = vec![Comparison::new("A", "B"), Comparison::new("A", "C")];
        let skipped = vec![Comparison::new("B", "A")];
        assert_eq!(filter_skipped(&pairs, &skipped), vec![Comparison::new("A", "C")]);
    }
}
