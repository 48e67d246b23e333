//! Build errors for automaton and transition builders.

use crate::engine::ValidationError;
use thiserror::Error;

/// Errors that can occur when building automata and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition id not specified. Call .id(id)")]
    MissingTransitionId,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Observability label not specified. Call .observability(label)")]
    MissingObservability,

    #[error("Relevance label not specified. Call .relevance(label)")]
    MissingRelevance,

    /// The assembled sets violate a structural invariant.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
