/// The acyclic "preferred-over" relation.
///
/// Backed by a `petgraph` directed graph plus a name→index map. The edge set
/// is kept acyclic as an invariant: `add_edge` checks reverse reachability
/// before inserting and refuses contradictory edges, so no caller can ever
/// observe a cycle.
use std::collections::HashMap;

use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::error::CoreError;

/// Directed acyclic graph over item names; edge (a → b) means "a preferred
/// over b".
#[derive(Debug, Clone, Default)]
pub struct OrderGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl OrderGraph {
    /// Empty graph with no items.
    pub fn new() -> Self {
        OrderGraph::default()
    }

    /// Graph containing `items` as nodes and no edges.
    pub fn with_items(items: &[String]) -> Result<Self, CoreError> {
        let mut g = OrderGraph::new();
        for item in items {
            g.add_item(item)?;
        }
        Ok(g)
    }

    /// Add a node. Duplicate names are a construction error.
    pub fn add_item(&mut self, item: &str) -> Result<(), CoreError> {
        if self.index.contains_key(item) {
            return Err(CoreError::DuplicateItem(item.to_string()));
        }
        let idx = self.graph.add_node(item.to_string());
        self.index.insert(item.to_string(), idx);
        Ok(())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn lookup(&self, item: &str) -> Result<NodeIndex, CoreError> {
        self.index
            .get(item)
            .copied()
            .ok_or_else(|| CoreError::UnknownItem(item.to_string()))
    }

    /// Record `a ≻ b`.
    ///
    /// Refused with `CycleAttempt` if a path b → … → a already exists — the
    /// check runs before any mutation, so a refused insert leaves the graph
    /// untouched. Re-inserting an existing edge is a no-op.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), CoreError> {
        let ia = self.lookup(a)?;
        let ib = self.lookup(b)?;
        if ia == ib || has_path_connecting(&self.graph, ib, ia, None) {
            return Err(CoreError::CycleAttempt {
                from: a.to_string(),
                to: b.to_string(),
            });
        }
        if self.graph.find_edge(ia, ib).is_none() {
            self.graph.add_edge(ia, ib, ());
        }
        Ok(())
    }

    /// True iff `a` reaches `b` through one or more edges. Reflexive-free:
    /// `has_path(x, x)` is always false.
    pub fn has_path(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => ia != ib && has_path_connecting(&self.graph, ia, ib, None),
            _ => false,
        }
    }

    /// Add the edge `a → b`, run `f` against the modified graph, then remove
    /// the edge again. Used by the ranking heuristic as a scoped probe — the
    /// edge set is guaranteed identical before and after.
    ///
    /// Returns `None` without touching the graph if the probe edge already
    /// exists or would create a cycle (a correctly pruned candidate never
    /// hits either case).
    pub fn probe_edge<R>(&mut self, a: &str, b: &str, f: impl FnOnce(&OrderGraph) -> R) -> Option<R> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        if ia == ib
            || self.graph.find_edge(ia, ib).is_some()
            || has_path_connecting(&self.graph, ib, ia, None)
        {
            return None;
        }
        let edge = self.graph.add_edge(ia, ib, ());
        let out = f(self);
        self.graph.remove_edge(edge);
        Some(out)
    }

    /// Reduce to the minimal edge set with the same reachability relation:
    /// every edge (u, v) for which some other u → … → v path exists is
    /// dropped. Idempotent.
    pub fn transitive_reduction(&mut self) {
        let endpoints: Vec<(NodeIndex, NodeIndex)> = self
            .graph
            .edge_references()
            .map(|e| (e.source(), e.target()))
            .collect();

        for (u, v) in endpoints {
            // Edge indices shift on removal, so re-locate each edge.
            let edge = match self.graph.find_edge(u, v) {
                Some(e) => e,
                None => continue,
            };
            self.graph.remove_edge(edge);
            if !has_path_connecting(&self.graph, u, v, None) {
                // No longer reachable without the direct edge — keep it.
                self.graph.add_edge(u, v, ());
            }
        }
    }

    /// Longest-path topological ranking, most- to least-preferred.
    ///
    /// Each node is layered by its longest incoming path; nodes are ordered
    /// by (layer, topological position). Returns `None` when the graph holds
    /// no order information at all (no edges) — callers must not fabricate a
    /// ranking from it. Meaningful as a total order only once every pending
    /// comparison is resolved without skips.
    pub fn linear_extension(&self) -> Option<Vec<String>> {
        if self.graph.edge_count() == 0 {
            return None;
        }
        // The acyclicity invariant makes toposort infallible here.
        let order = toposort(&self.graph, None).ok()?;

        let mut depth: HashMap<NodeIndex, usize> = HashMap::with_capacity(order.len());
        for &node in &order {
            let d = self
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .map(|p| depth.get(&p).copied().unwrap_or(0) + 1)
                .max()
                .unwrap_or(0);
            depth.insert(node, d);
        }

        let mut ranked: Vec<(usize, usize, &str)> = order
            .iter()
            .enumerate()
            .map(|(pos, &n)| (depth[&n], pos, self.graph[n].as_str()))
            .collect();
        ranked.sort_by_key(|&(d, pos, _)| (d, pos));

        Some(ranked.into_iter().map(|(_, _, name)| name.to_string()).collect())
    }

    /// Node names in insertion order. The rendering consumer enumerates these.
    pub fn nodes(&self) -> Vec<String> {
        self.graph.node_indices().map(|i| self.graph[i].clone()).collect()
    }

    /// Edge name pairs (winner, loser).
    pub fn edges(&self) -> Vec<(String, String)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()].clone(), self.graph[e.target()].clone()))
            .collect()
    }
}

impl PartialEq for OrderGraph {
    fn eq(&self, other: &Self) -> bool {
        let mut a_nodes = self.nodes();
        let mut b_nodes = other.nodes();
        a_nodes.sort();
        b_nodes.sort();
        let mut a_edges = self.edges();
        let mut b_edges = other.edges();
        a_edges.sort();
        b_edges.sort();
        a_nodes == b_nodes && a_edges == b_edges
    }
}

impl Eq for OrderGraph {}
