/// Information-value ranking of candidate comparisons.
///
/// For each candidate the heuristic simulates both possible answers and
/// counts how many other pending pairs pruning would then remove. The score
/// is the worst case of the two — the reduction the judgment guarantees
/// regardless of which way the user decides. Simulation uses the graph's
/// scoped probe, so the edge set is untouched once scoring completes.
use crate::graph::OrderGraph;
use crate::prune::prune;
use crate::types::Comparison;

/// A candidate comparison with its guaranteed-pruning score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredComparison {
    pub comparison: Comparison,
    /// Worst-case number of other pending pairs the judgment resolves.
    pub score: usize,
}

/// Score `candidates` against the full `pending` set and sort descending by
/// score. The sort is stable: equal-score candidates keep their incoming
/// relative order.
pub fn score_candidates(
    candidates: &[Comparison],
    pending: &[Comparison],
    graph: &mut OrderGraph,
) -> Vec<ScoredComparison> {
    let mut scored: Vec<ScoredComparison> = candidates
        .iter()
        .map(|c| ScoredComparison {
            score: guaranteed_gain(c, pending, graph),
            comparison: c.clone(),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// min(gain if first≻second, gain if second≻first), where each gain counts
/// the *other* pending pairs pruned by that simulated edge.
fn guaranteed_gain(candidate: &Comparison, pending: &[Comparison], graph: &mut OrderGraph) -> usize {
    let others: Vec<Comparison> = pending.iter().filter(|p| *p != candidate).cloned().collect();

    let gain = |graph: &mut OrderGraph, winner: &str, loser: &str| {
        graph
            .probe_edge(winner, loser, |g| others.len() - prune(&others, g).len())
            .unwrap_or(0)
    };

    let forward = gain(graph, candidate.first(), candidate.second());
    let backward = gain(graph, candidate.second(), candidate.first());
    forward.min(backward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::all_pairs;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scoring_leaves_graph_unchanged() {
        let names = items(&["A", "B", "C", "D"]);
        let mut g = OrderGraph::with_items(&names).unwrap();
        g.add_edge("A", "B").unwrap();
        let before = g.clone();

        let pending = prune(&all_pairs(&names), &g);
        let _ = score_candidates(&pending, &pending, &mut g);

        assert_eq!(g, before, "scoring must not mutate the graph");
    }

    #[test]
    fn test_score_is_worst_case_and_bounded() {
        let names = items(&["A", "B", "C"]);
        let mut g = OrderGraph::with_items(&names).unwrap();
        g.add_edge("A", "B").unwrap();

        let pending = prune(&all_pairs(&names), &g);
        assert_eq!(pending.len(), 2); // A-vs-C, B-vs-C

        let scored = score_candidates(&pending, &pending, &mut g);
        for s in &scored {
            assert!(s.score <= pending.len() - 1, "score bounded by other pending pairs");
        }
        // Judging A-vs-C either way: C≻A implies C≻B (prunes B-vs-C), but
        // A≻C resolves nothing else. Worst case is 0. Same for B-vs-C.
        assert!(scored.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_top_vs_top_pair_scores_highest() {
        // Two recorded chains A≻B and C≻D. Judging the two tops against each
        // other prunes exactly one extra pair whichever way it falls
        // (A≻C implies A≻D; C≻A implies C≻B), so A-vs-C guarantees gain 1.
        // B-vs-C guarantees nothing: C≻B resolves no other pair.
        let names = items(&["A", "B", "C", "D"]);
        let mut g = OrderGraph::with_items(&names).unwrap();
        g.add_edge("A", "B").unwrap();
        g.add_edge("C", "D").unwrap();

        let pending = prune(&all_pairs(&names), &g);
        let scored = score_candidates(&pending, &pending, &mut g);

        assert_eq!(scored[0].comparison, Comparison::new("A", "C"));
        assert_eq!(scored[0].score, 1);
        let score_of = |c: &Comparison| scored.iter().find(|s| &s.comparison == c).unwrap().score;
        assert_eq!(score_of(&Comparison::new("B", "D")), 1);
        assert_eq!(score_of(&Comparison::new("B", "C")), 0);
        assert_eq!(score_of(&Comparison::new("A", "D")), 0);
    }

    #[test]
    fn test_equal_scores_keep_incoming_order() {
        let names = items(&["A", "B", "C", "D"]);
        let mut g = OrderGraph::with_items(&names).unwrap();

        // Empty graph: every pair scores identically (0 guaranteed gain).
        let pending = all_pairs(&names);
        let scored = score_candidates(&pending, &pending, &mut g);

        let order: Vec<Comparison> = scored.into_iter().map(|s| s.comparison).collect();
        assert_eq!(order, pending, "stable sort must preserve pre-sort order on ties");
    }
}
