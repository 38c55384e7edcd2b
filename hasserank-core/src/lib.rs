/// hasserank-core: Pairwise preference elicitation engine.
///
/// Builds a strict partial order ("preferred-over" DAG) over a fixed item set
/// from one-at-a-time human judgments, asking as few questions as possible by
/// exploiting transitivity: once A≻B and B≻C are recorded, A-vs-C is implied
/// and never asked. No terminal handling, no filesystem — bring your own IO.
///
/// Items are identified by caller-provided `String` names.
///
/// # Quick start
///
/// ```rust
/// use hasserank_core::SessionState;
///
/// let items: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
/// let mut state = SessionState::new(&items).unwrap();
///
/// state.judge("A", "B").unwrap();
/// state.judge("B", "C").unwrap();
/// // A-vs-C was pruned by transitivity — the session is already complete.
/// assert!(state.is_done());
///
/// state.graph.transitive_reduction();
/// assert_eq!(state.graph.linear_extension().unwrap(), items);
/// ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod heuristic;
#[cfg(feature = "serde")]
pub mod persist;
pub mod prune;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::{
    CommandSource, DisplayCandidate, EngineConfig, InteractionLoop, LoopOutcome, Notice,
    Presenter, Prompt,
};
pub use error::CoreError;
pub use graph::OrderGraph;
pub use heuristic::{score_candidates, ScoredComparison};
pub use prune::{filter_skipped, prune};
pub use session::SessionState;
pub use types::{all_pairs, Command, Comparison, Mode};
