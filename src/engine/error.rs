//! Construction and execution errors.

use thiserror::Error;

/// Structural-validity failures detected at construction.
///
/// Exactly one variant per invariant; construction short-circuits on the
/// first violated invariant, in declaration order. All variants are
/// recoverable: fix the input and call `create` again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two states in the state set share an id.
    #[error("duplicate state `{0}` in the state set")]
    DuplicateState(String),

    /// Two transitions in the transition set share an id.
    #[error("duplicate transition `{0}` in the transition set")]
    DuplicateTransition(String),

    /// The initial state is not a member of the state set.
    #[error("initial state `{0}` is not a member of the state set")]
    InitialStateNotInStates(String),

    /// A state is the source of no transition.
    #[error("state `{0}` has no outgoing transition")]
    StateWithoutOutgoingTransition(String),

    /// A state is disconnected from the rest of the graph.
    #[error("state `{0}` is unreachable from the rest of the graph")]
    IsolatedState(String),
}

/// An output sequence longer than the configured bound.
///
/// Overflow is scoped to the offending transition: it never truncates the
/// sequence and never moves the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transition `{transition}` emits {len} output events, exceeding the bound of {bound}")]
pub struct OutputOverflow {
    /// Id of the offending transition.
    pub transition: String,
    /// Length of its output sequence.
    pub len: usize,
    /// The configured bound it exceeds.
    pub bound: usize,
}

/// Failures reported by the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The single enabled transition, or a committed branch, exceeds the
    /// output bound. The cursor is unaffected.
    #[error(transparent)]
    OutputOverflow(#[from] OutputOverflow),

    /// The requested state is not a member of the state set. Raised by
    /// cursor restoration and branch commit.
    #[error("state `{0}` is not a member of the state set")]
    UnknownState(String),

    /// The current-state cursor no longer belongs to the state set. This
    /// is a broken invariant, not a recoverable condition: the automaton
    /// must be rebuilt.
    #[error("current state `{0}` is no longer a member of the state set; rebuild the automaton")]
    Faulted(String),
}
