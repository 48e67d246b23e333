//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders for creating automata with
//! minimal boilerplate. Validation stays where it belongs: builders
//! check only that required fields were supplied, and
//! [`AutomatonBuilder::build`] defers every structural invariant to
//! [`Automaton::create`](crate::engine::Automaton::create).

pub mod automaton;
pub mod error;
pub mod transition;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::{Label, State, Transition};

/// Create an unconditional transition with no outputs.
///
/// # Example
///
/// ```rust
/// use automa::builder::epsilon_transition;
/// use automa::core::{Label, State};
///
/// let t = epsilon_transition(
///     "t1",
///     State::create(0, "A"),
///     State::create(1, "B"),
///     Label::observability("o"),
///     Label::relevance("r"),
/// );
///
/// assert!(t.input().is_none());
/// assert!(t.outputs().is_empty());
/// ```
pub fn epsilon_transition(
    id: impl Into<String>,
    from: State,
    to: State,
    observability: Label,
    relevance: Label,
) -> Transition {
    Transition::create(id, from, to, None, Vec::new(), observability, relevance)
}
