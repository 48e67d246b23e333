//! Outcomes of a single execution step.

use super::error::OutputOverflow;
use crate::core::{Event, State};

/// A committed deterministic step: exactly one transition was enabled and
/// the cursor has already moved to its target.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Id of the transition that fired.
    pub transition: String,
    /// The automaton's new current state.
    pub state: State,
    /// Output events emitted, in the transition's original order.
    pub outputs: Vec<Event>,
}

/// One of several simultaneously enabled successor outcomes.
///
/// A branch carries its own private resulting state and output sequence;
/// producing branches never touches the shared cursor. An overflowing
/// branch carries the [`OutputOverflow`] in place of its outputs and can
/// not be committed.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    /// Id of the enabled transition this branch corresponds to.
    pub transition: String,
    /// The state this branch would move the automaton to.
    pub state: State,
    /// The outputs this branch would emit, or the overflow that
    /// disqualifies it.
    pub outputs: Result<Vec<Event>, OutputOverflow>,
}

impl Branch {
    /// Whether this branch exceeded the output bound.
    pub fn is_overflowed(&self) -> bool {
        self.outputs.is_err()
    }
}

/// Result of [`Automaton::step`](crate::engine::Automaton::step).
///
/// Every variant must be handled by the caller; there is no default
/// successful path.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// No transition is enabled. Expected and frequent; the cursor is
    /// unchanged.
    Blocked,

    /// Exactly one transition was enabled and has been committed.
    Stepped(Step),

    /// More than one transition is enabled: genuine non-determinism. One
    /// branch per enabled transition, none omitted, none chosen. The
    /// cursor is unchanged until the caller commits exactly one branch.
    Branches(Vec<Branch>),
}
