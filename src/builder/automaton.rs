//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{State, Transition};
use crate::engine::{Automaton, DEFAULT_OUTPUT_BOUND};

/// Builder for constructing automata with a fluent API.
///
/// Collects states and transitions, then hands them to
/// [`Automaton::create`] on [`build`](AutomatonBuilder::build), so every
/// structural invariant is enforced exactly once, in one place.
pub struct AutomatonBuilder {
    id: u32,
    name: String,
    states: Vec<State>,
    transitions: Vec<Transition>,
    initial: Option<State>,
    output_bound: usize,
}

impl AutomatonBuilder {
    /// Create a new builder for an automaton with the given id and name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            output_bound: DEFAULT_OUTPUT_BOUND,
        }
    }

    /// Add one state.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Override the output bound (defaults to [`DEFAULT_OUTPUT_BOUND`]).
    pub fn output_bound(mut self, bound: usize) -> Self {
        self.output_bound = bound;
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing or the assembled
    /// sets violate a structural invariant.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Automaton::with_output_bound(
            self.id,
            self.name,
            self.states,
            self.transitions,
            initial,
            self.output_bound,
        )
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::epsilon_transition;
    use crate::core::Label;
    use crate::engine::ValidationError;

    fn labels() -> (Label, Label) {
        (Label::observability("o"), Label::relevance("r"))
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = AutomatonBuilder::new(1, "m").build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = AutomatonBuilder::new(1, "m")
            .initial(State::create(0, "A"))
            .build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = AutomatonBuilder::new(1, "m")
            .state(State::create(0, "A"))
            .initial(State::create(0, "A"))
            .build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let a = State::create(0, "A");
        let b = State::create(1, "B");
        let (oss, ril) = labels();

        let automaton = AutomatonBuilder::new(1, "m")
            .states(vec![a.clone(), b.clone()])
            .add_transition(epsilon_transition(
                "t1",
                a.clone(),
                b.clone(),
                oss.clone(),
                ril.clone(),
            ))
            .add_transition(epsilon_transition("t2", b, a.clone(), oss, ril))
            .initial(a.clone())
            .build()
            .unwrap();

        assert_eq!(automaton.current_state(), &a);
        assert_eq!(automaton.transitions().len(), 2);
    }

    #[test]
    fn builder_surfaces_validation_errors() {
        let a = State::create(0, "A");
        let (oss, ril) = labels();

        let result = AutomatonBuilder::new(1, "m")
            .state(a.clone())
            .state(State::create(0, "A_dup"))
            .add_transition(epsilon_transition("t1", a.clone(), a.clone(), oss, ril))
            .initial(a)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(ValidationError::DuplicateState(_)))
        ));
    }

    #[test]
    fn transition_builder_feeds_automaton_builder() {
        let a = State::create(0, "A");
        let (oss, ril) = labels();

        let automaton = AutomatonBuilder::new(1, "m")
            .state(a.clone())
            .transition(
                TransitionBuilder::new()
                    .id("t1")
                    .from(a.clone())
                    .to(a.clone())
                    .observability(oss)
                    .relevance(ril),
            )
            .unwrap()
            .initial(a)
            .build();

        assert!(automaton.is_ok());
    }
}
