/// Error taxonomy for the elicitation engine.
///
/// Per-keystroke conditions (unrecognized command, out-of-range selection)
/// never escape the interaction loop — they are reprompted locally and do not
/// appear here. A `CycleAttempt` should be unreachable when pruning is invoked
/// after every judgment; seeing one signals a logic defect, not a user error.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Recording `from ≻ to` would contradict the existing order.
    #[error("judgment contradicts existing order: \"{to}\" is already preferred over \"{from}\"")]
    CycleAttempt { from: String, to: String },

    /// The same item name appears twice in the item list.
    #[error("duplicate item: \"{0}\"")]
    DuplicateItem(String),

    /// An operation referenced an item that is not part of the session.
    #[error("unknown item: \"{0}\"")]
    UnknownItem(String),

    /// A persisted session blob could not be reconstructed.
    #[error("corrupt session state: {0}")]
    CorruptSessionState(String),
}
