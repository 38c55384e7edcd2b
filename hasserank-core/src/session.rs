/// Mutable session aggregate — the unit of persistence.
///
/// Holds the order graph, the pending and skipped comparison sets, the move
/// counter, and the queue of items that still have unresolved comparisons.
/// Every accepted judgment re-prunes the *entire* pending set, since a single
/// new edge can transitively resolve pairs far from the one just judged.
use crate::error::CoreError;
use crate::graph::OrderGraph;
use crate::prune::prune;
use crate::types::{all_pairs, Comparison};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub graph: OrderGraph,
    /// Unresolved, unpruned, unskipped comparisons. Non-increasing in size.
    pub pending: Vec<Comparison>,
    /// Deferred comparisons: out of consideration, not reflected in the graph.
    pub skipped: Vec<Comparison>,
    pub move_count: u64,
    /// Items that may still have at least one pending comparison.
    pub remaining: Vec<String>,
}

impl SessionState {
    /// Fresh session: empty graph over `items`, all C(n,2) pairs pending.
    pub fn new(items: &[String]) -> Result<Self, CoreError> {
        let graph = OrderGraph::with_items(items)?;
        Ok(SessionState {
            graph,
            pending: all_pairs(items),
            skipped: Vec::new(),
            move_count: 0,
            remaining: items.to_vec(),
        })
    }

    /// Record `winner ≻ loser`, drop the resolved pair, and re-prune the full
    /// pending set. A `CycleAttempt` leaves the state untouched.
    pub fn judge(&mut self, winner: &str, loser: &str) -> Result<(), CoreError> {
        self.graph.add_edge(winner, loser)?;
        let resolved = Comparison::new(winner, loser);
        self.pending.retain(|c| *c != resolved);
        self.pending = prune(&self.pending, &self.graph);
        self.move_count += 1;
        Ok(())
    }

    /// Defer a comparison: remove it from pending without touching the graph.
    pub fn skip(&mut self, comparison: &Comparison) {
        self.pending.retain(|c| c != comparison);
        if !self.skipped.contains(comparison) {
            self.skipped.push(comparison.clone());
        }
        self.move_count += 1;
    }

    /// Pending comparisons involving `item`.
    pub fn pending_for(&self, item: &str) -> Vec<Comparison> {
        self.pending.iter().filter(|c| c.involves(item)).cloned().collect()
    }

    /// True once no pending comparisons remain anywhere.
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }
}
