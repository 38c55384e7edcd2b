/// The elicitation state machine.
///
/// Drives SelectingFocus → AwaitingJudgment → … → Done over a `SessionState`.
/// IO is injected: a `CommandSource` produces input tokens (interactive stdin
/// in the CLI, a scripted vector in tests) and a `Presenter` receives the
/// structured prompt to render. Focus selection is uniform over items that
/// still have pending comparisons, from a seedable RNG so tests can force a
/// deterministic traversal.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::heuristic::{score_candidates, ScoredComparison};
use crate::prune::{filter_skipped, prune};
use crate::session::SessionState;
use crate::types::{Command, Comparison, Mode};

/// Loop configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Max comparisons shown at once. Limits simultaneous choice only — it
    /// does not change what gets asked overall.
    pub display_limit: usize,
    /// Fixed RNG seed for deterministic focus selection. `None` = OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { display_limit: 5, seed: None }
    }
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// Every pending comparison was resolved; the graph has been reduced.
    Completed,
    /// The user quit early. The graph is left unreduced.
    Quit,
}

/// Non-fatal condition reported back through the next prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Unrecognized input token.
    InvalidInput(String),
    /// Numeric selection outside the displayed range.
    IndexOutOfRange { given: usize, shown: usize },
    /// The judgment contradicted the recorded order. Should be unreachable
    /// with correct pruning; surfaced rather than hidden so a logic defect
    /// is visible.
    JudgmentRejected(String),
}

/// One displayed candidate, oriented relative to the focus item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCandidate {
    pub comparison: Comparison,
    /// The non-focus side of the pair.
    pub other: String,
    pub score: usize,
}

/// Structured prompt state handed to the presenter each input cycle.
#[derive(Debug)]
pub struct Prompt<'a> {
    pub focus: &'a str,
    pub candidates: &'a [DisplayCandidate],
    pub mode: Mode,
    pub pending_count: usize,
    pub skipped_count: usize,
    pub move_count: u64,
    pub notice: Option<&'a Notice>,
}

/// Produces the next input token. `None` means end of input (treated as quit).
pub trait CommandSource {
    fn next_token(&mut self) -> Option<String>;
}

/// Renders prompt state. The core never formats terminal output itself.
pub trait Presenter {
    fn present(&mut self, prompt: &Prompt<'_>);
}

pub struct InteractionLoop<S, P> {
    state: SessionState,
    config: EngineConfig,
    rng: StdRng,
    source: S,
    presenter: P,
}

impl<S: CommandSource, P: Presenter> InteractionLoop<S, P> {
    pub fn new(state: SessionState, config: EngineConfig, source: S, presenter: P) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        InteractionLoop { state, config, rng, source, presenter }
    }

    /// Run to completion or quit. `on_judgment` fires after every resolving
    /// action (accepted judgment or skip) — the CLI persists the session
    /// there. On completion the graph is transitively reduced before return.
    pub fn run(mut self, mut on_judgment: impl FnMut(&SessionState)) -> (SessionState, LoopOutcome) {
        loop {
            // SelectingFocus: drop settled items, pick uniformly among the rest.
            let focus = {
                let pending = &self.state.pending;
                self.state.remaining.retain(|item| pending.iter().any(|c| c.involves(item)));
                if self.state.remaining.is_empty() {
                    break;
                }
                let i = self.rng.random_range(0..self.state.remaining.len());
                self.state.remaining[i].clone()
            };

            // AwaitingJudgment: mode starts at greater for each new focus.
            let mut mode = Mode::Greater;
            let mut notice: Option<Notice> = None;
            let mut shown = self.displayed_candidates(&focus);
            if shown.is_empty() {
                // A pending pair that display-time pruning rejects is stale;
                // flush it so it cannot pin its items in the remaining queue.
                self.state.pending = prune(&self.state.pending, &self.state.graph);
                continue;
            }

            loop {
                self.presenter.present(&Prompt {
                    focus: &focus,
                    candidates: &shown,
                    mode,
                    pending_count: self.state.pending.len(),
                    skipped_count: self.state.skipped.len(),
                    move_count: self.state.move_count,
                    notice: notice.as_ref(),
                });
                notice = None;

                let token = match self.source.next_token() {
                    Some(t) => t,
                    None => return (self.state, LoopOutcome::Quit),
                };

                match Command::parse(&token) {
                    None => {
                        notice = Some(Notice::InvalidInput(token));
                    }
                    Some(Command::Quit) => return (self.state, LoopOutcome::Quit),
                    Some(Command::Mode(m)) => {
                        // Mode switches never consume a comparison or re-rank.
                        mode = m;
                    }
                    Some(Command::Rerank) => {
                        shown = self.displayed_candidates(&focus);
                    }
                    Some(Command::Select(i)) => {
                        if i >= shown.len() {
                            notice = Some(Notice::IndexOutOfRange { given: i, shown: shown.len() });
                            continue;
                        }
                        match self.resolve(&focus, &shown[i], mode) {
                            Ok(()) => {
                                on_judgment(&self.state);
                                // Stay on this focus with the current mode:
                                // recompute and re-rank its candidates, and
                                // reselect only once none remain.
                                shown = self.displayed_candidates(&focus);
                                if shown.is_empty() {
                                    break; // back to SelectingFocus
                                }
                            }
                            Err(msg) => {
                                notice = Some(Notice::JudgmentRejected(msg));
                            }
                        }
                    }
                }
            }
        }

        // Done: hand back the minimal graph.
        self.state.graph.transitive_reduction();
        (self.state, LoopOutcome::Completed)
    }

    /// Candidates for a focus item: skip-filtered, pruned, heuristic-ordered,
    /// truncated to the display limit.
    fn displayed_candidates(&mut self, focus: &str) -> Vec<DisplayCandidate> {
        let for_focus = self.state.pending_for(focus);
        let unskipped = filter_skipped(&for_focus, &self.state.skipped);
        let candidates = prune(&unskipped, &self.state.graph);

        let scored: Vec<ScoredComparison> =
            score_candidates(&candidates, &self.state.pending, &mut self.state.graph);

        scored
            .into_iter()
            .take(self.config.display_limit)
            .map(|s| DisplayCandidate {
                other: s
                    .comparison
                    .other_than(focus)
                    .expect("focus candidate always involves the focus item")
                    .to_string(),
                comparison: s.comparison,
                score: s.score,
            })
            .collect()
    }

    /// Apply one judgment to the selected pair, normalized so `Greater`
    /// always means "focus preferred over the other item" regardless of the
    /// pair's stored element order.
    fn resolve(&mut self, focus: &str, chosen: &DisplayCandidate, mode: Mode) -> Result<(), String> {
        match mode {
            Mode::Skip => {
                self.state.skip(&chosen.comparison);
                Ok(())
            }
            Mode::Greater => self
                .state
                .judge(focus, &chosen.other)
                .map_err(|e| e.to_string()),
            Mode::Less => self
                .state
                .judge(&chosen.other, focus)
                .map_err(|e| e.to_string()),
        }
    }
}
