/// Session persistence codec.
///
/// Encodes a `SessionState` as a schema-tagged JSON record. The graph is
/// flattened to node and edge lists; loading rebuilds it through `add_edge`,
/// so a tampered blob containing a cycle is rejected as corrupt instead of
/// reconstructing an invalid order. Where the blob lives and how it gets
/// written atomically is the caller's concern.
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::graph::OrderGraph;
use crate::session::SessionState;
use crate::types::Comparison;

/// Bumped on any incompatible change to `SessionRecord`.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SessionRecord {
    version: u32,
    items: Vec<String>,
    /// (winner, loser) pairs.
    edges: Vec<(String, String)>,
    pending: Vec<(String, String)>,
    skipped: Vec<(String, String)>,
    move_count: u64,
    remaining: Vec<String>,
}

/// Encode a session to bytes.
pub fn save(state: &SessionState) -> Vec<u8> {
    let record = SessionRecord {
        version: FORMAT_VERSION,
        items: state.graph.nodes(),
        edges: state.graph.edges(),
        pending: flatten(&state.pending),
        skipped: flatten(&state.skipped),
        move_count: state.move_count,
        remaining: state.remaining.clone(),
    };
    serde_json::to_vec_pretty(&record).expect("session record serialization cannot fail")
}

/// Decode a session from bytes produced by `save`.
pub fn load(bytes: &[u8]) -> Result<SessionState, CoreError> {
    let record: SessionRecord = serde_json::from_slice(bytes)
        .map_err(|e| CoreError::CorruptSessionState(e.to_string()))?;

    if record.version != FORMAT_VERSION {
        return Err(CoreError::CorruptSessionState(format!(
            "unsupported format version {} (expected {})",
            record.version, FORMAT_VERSION
        )));
    }

    let mut graph = OrderGraph::with_items(&record.items)
        .map_err(|e| CoreError::CorruptSessionState(e.to_string()))?;
    for (winner, loser) in &record.edges {
        graph
            .add_edge(winner, loser)
            .map_err(|e| CoreError::CorruptSessionState(e.to_string()))?;
    }

    let state = SessionState {
        pending: unflatten(&graph, &record.pending)?,
        skipped: unflatten(&graph, &record.skipped)?,
        graph,
        move_count: record.move_count,
        remaining: record.remaining,
    };

    for item in &state.remaining {
        if !state.graph.contains(item) {
            return Err(CoreError::CorruptSessionState(format!(
                "remaining item \"{item}\" is not in the item set"
            )));
        }
    }
    Ok(state)
}

fn flatten(comparisons: &[Comparison]) -> Vec<(String, String)> {
    comparisons
        .iter()
        .map(|c| (c.first().to_string(), c.second().to_string()))
        .collect()
}

/// Rebuild comparisons through `Comparison::new` so canonical ordering holds
/// even for hand-edited blobs; unknown items are rejected.
fn unflatten(graph: &OrderGraph, pairs: &[(String, String)]) -> Result<Vec<Comparison>, CoreError> {
    pairs
        .iter()
        .map(|(x, y)| {
            for item in [x, y] {
                if !graph.contains(item) {
                    return Err(CoreError::CorruptSessionState(format!(
                        "comparison references unknown item \"{item}\""
                    )));
                }
            }
            if x == y {
                return Err(CoreError::CorruptSessionState(format!(
                    "comparison pairs \"{x}\" with itself"
                )));
            }
            Ok(Comparison::new(x.clone(), y.clone()))
        })
        .collect()
}
