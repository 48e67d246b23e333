//! The automaton: validated structure plus the branch-exposing engine.

use super::error::{ExecutionError, OutputOverflow, ValidationError};
use super::outcome::{Branch, Step, StepOutcome};
use crate::core::{Event, ExecutionTrace, State, StepRecord, Transition};
use chrono::Utc;
use std::collections::{HashMap, HashSet};

/// Default bound on the length of an emitted output sequence.
pub const DEFAULT_OUTPUT_BOUND: usize = 64;

/// A labeled non-deterministic finite-state automaton.
///
/// An automaton owns its state set and transition set. Both are validated
/// as a unit by [`Automaton::create`] and never replaced afterwards; the
/// only mutable piece is the current-state cursor, which moves on each
/// committed step.
///
/// Stepping is driven by [`Automaton::step`]: given the set of currently
/// available input events it reports whether the automaton is blocked,
/// took the single enabled transition, or faces genuine non-determinism —
/// in which case every enabled successor is exposed as a [`Branch`] and
/// the caller decides which one to [`commit`](Automaton::commit).
///
/// The automaton is `Clone`: an exhaustive explorer clones it per branch
/// so that each exploration path carries its own private cursor instead
/// of fighting over a shared one.
///
/// # Example
///
/// ```rust
/// use automa::core::{Event, Label, State, Transition};
/// use automa::engine::{Automaton, StepOutcome};
/// use std::collections::HashSet;
///
/// let a = State::create(0, "A");
/// let b = State::create(1, "B");
/// let e1 = Event::create(1, "e1");
/// let e2 = Event::create(2, "e2");
///
/// let t1 = Transition::create(
///     "t1", a.clone(), b.clone(), Some(e1.clone()), vec![e2.clone()],
///     Label::observability("o"), Label::relevance("r"),
/// );
/// let t2 = Transition::create(
///     "t2", b.clone(), b.clone(), Some(e2.clone()), vec![],
///     Label::observability("o"), Label::relevance("r"),
/// );
///
/// let mut automaton =
///     Automaton::create(1, "demo", vec![a.clone(), b.clone()], vec![t1, t2], a).unwrap();
///
/// let available: HashSet<Event> = [e1].into_iter().collect();
/// match automaton.step(&available).unwrap() {
///     StepOutcome::Stepped(step) => {
///         assert_eq!(step.state, b);
///         assert_eq!(step.outputs, vec![e2]);
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    id: u32,
    name: String,
    states: Vec<State>,
    transitions: Vec<Transition>,
    current: State,
    output_bound: usize,
    trace: ExecutionTrace,
}

impl Automaton {
    /// Build a structurally valid automaton, or report exactly which
    /// invariant failed.
    ///
    /// The checks run in order and short-circuit on the first failure:
    /// duplicate states, duplicate transitions, initial-state membership,
    /// states without outgoing transitions, isolated states. Uniqueness
    /// is checked through hash sets over identity keys, not pairwise
    /// comparison.
    ///
    /// On failure nothing is built: a [`ValidationError`] comes back
    /// instead of a partially-formed automaton.
    pub fn create(
        id: u32,
        name: impl Into<String>,
        states: Vec<State>,
        transitions: Vec<Transition>,
        initial: State,
    ) -> Result<Self, ValidationError> {
        Self::with_output_bound(id, name, states, transitions, initial, DEFAULT_OUTPUT_BOUND)
    }

    /// Like [`Automaton::create`] with an explicit output bound instead
    /// of [`DEFAULT_OUTPUT_BOUND`].
    pub fn with_output_bound(
        id: u32,
        name: impl Into<String>,
        states: Vec<State>,
        transitions: Vec<Transition>,
        initial: State,
        output_bound: usize,
    ) -> Result<Self, ValidationError> {
        validate(&states, &transitions, &initial)?;
        Ok(Self {
            id,
            name: name.into(),
            states,
            transitions,
            current: initial,
            output_bound,
            trace: ExecutionTrace::new(),
        })
    }

    /// Unique identifier of the automaton.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Name of the automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full state set.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The full transition set.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The current-state cursor.
    pub fn current_state(&self) -> &State {
        &self.current
    }

    /// Maximum length of an emitted output sequence.
    pub fn output_bound(&self) -> usize {
        self.output_bound
    }

    /// Trace of every committed step, oldest first.
    pub fn trace(&self) -> &ExecutionTrace {
        &self.trace
    }

    /// Move the cursor to `state` without firing a transition, for
    /// external state restoration. Refuses states outside the state set.
    pub fn set_current_state(&mut self, state: State) -> Result<(), ExecutionError> {
        if !self.states.contains(&state) {
            return Err(ExecutionError::UnknownState(state.name().to_string()));
        }
        self.current = state;
        Ok(())
    }

    /// Execute one step given the set of currently available input
    /// events.
    ///
    /// A transition is enabled when its source is the current state and
    /// its input event is absent (unconditional) or available. Then:
    ///
    /// - no enabled transition: [`StepOutcome::Blocked`], cursor
    ///   unchanged;
    /// - exactly one: the step is committed and returned as
    ///   [`StepOutcome::Stepped`] — deterministic for identical
    ///   (cursor, available events);
    /// - several: [`StepOutcome::Branches`], one entry per enabled
    ///   transition in declaration order, cursor untouched until the
    ///   caller commits a branch.
    ///
    /// A single enabled transition whose output sequence exceeds the
    /// bound yields [`ExecutionError::OutputOverflow`] and leaves the
    /// cursor alone; inside a branch set the overflow is scoped to the
    /// offending branch. A cursor outside the state set is a broken
    /// invariant and reported as [`ExecutionError::Faulted`].
    pub fn step(&mut self, available: &HashSet<Event>) -> Result<StepOutcome, ExecutionError> {
        if !self.states.contains(&self.current) {
            return Err(ExecutionError::Faulted(self.current.name().to_string()));
        }

        let enabled: Vec<&Transition> = self
            .transitions
            .iter()
            .filter(|t| {
                t.source() == &self.current
                    && t.input().is_none_or(|input| available.contains(input))
            })
            .collect();

        match enabled.as_slice() {
            [] => Ok(StepOutcome::Blocked),
            [only] => {
                let outputs = bounded_outputs(only, self.output_bound)?;
                let step = Step {
                    transition: only.id().to_string(),
                    state: only.target().clone(),
                    outputs,
                };
                self.record_step(&step.transition, step.state.clone(), step.outputs.clone());
                self.current = step.state.clone();
                Ok(StepOutcome::Stepped(step))
            }
            many => {
                let branches = many
                    .iter()
                    .map(|t| Branch {
                        transition: t.id().to_string(),
                        state: t.target().clone(),
                        outputs: bounded_outputs(t, self.output_bound),
                    })
                    .collect();
                Ok(StepOutcome::Branches(branches))
            }
        }
    }

    /// Commit one branch of a [`StepOutcome::Branches`] outcome: record
    /// the step and move the cursor to the branch's resulting state.
    ///
    /// Overflowed branches are rejected with their [`OutputOverflow`];
    /// branches whose resulting state is not a member of the state set
    /// are rejected with [`ExecutionError::UnknownState`]. Committing
    /// more than one branch of the same outcome is a caller error the
    /// engine cannot detect; commit exactly one.
    pub fn commit(&mut self, branch: &Branch) -> Result<(), ExecutionError> {
        let outputs = branch
            .outputs
            .as_ref()
            .map_err(|overflow| ExecutionError::OutputOverflow(overflow.clone()))?;
        if !self.states.contains(&branch.state) {
            return Err(ExecutionError::UnknownState(branch.state.name().to_string()));
        }
        self.record_step(&branch.transition, branch.state.clone(), outputs.clone());
        self.current = branch.state.clone();
        Ok(())
    }

    fn record_step(&mut self, transition: &str, to: State, outputs: Vec<Event>) {
        self.trace = self.trace.record(StepRecord {
            transition: transition.to_string(),
            from: self.current.clone(),
            to,
            outputs,
            timestamp: Utc::now(),
        });
    }
}

fn bounded_outputs(transition: &Transition, bound: usize) -> Result<Vec<Event>, OutputOverflow> {
    let len = transition.outputs().len();
    if len > bound {
        return Err(OutputOverflow {
            transition: transition.id().to_string(),
            len,
            bound,
        });
    }
    Ok(transition.outputs().to_vec())
}

fn validate(
    states: &[State],
    transitions: &[Transition],
    initial: &State,
) -> Result<(), ValidationError> {
    let mut state_ids = HashSet::with_capacity(states.len());
    for state in states {
        if !state_ids.insert(state.id()) {
            return Err(ValidationError::DuplicateState(state.name().to_string()));
        }
    }

    let mut transition_ids = HashSet::with_capacity(transitions.len());
    for transition in transitions {
        if !transition_ids.insert(transition.id()) {
            return Err(ValidationError::DuplicateTransition(
                transition.id().to_string(),
            ));
        }
    }

    if !states.contains(initial) {
        return Err(ValidationError::InitialStateNotInStates(
            initial.name().to_string(),
        ));
    }

    let sources: HashSet<u32> = transitions.iter().map(|t| t.source().id()).collect();
    for state in states {
        if !sources.contains(&state.id()) {
            return Err(ValidationError::StateWithoutOutgoingTransition(
                state.name().to_string(),
            ));
        }
    }

    // Isolation check: every state must sit in the initial state's
    // component when edges are taken as undirected.
    let mut adjacency: HashMap<u32, Vec<u32>> = HashMap::new();
    for transition in transitions {
        let (source, target) = (transition.source().id(), transition.target().id());
        adjacency.entry(source).or_default().push(target);
        adjacency.entry(target).or_default().push(source);
    }
    let mut visited = HashSet::new();
    let mut frontier = vec![initial.id()];
    while let Some(id) = frontier.pop() {
        if visited.insert(id) {
            if let Some(neighbors) = adjacency.get(&id) {
                frontier.extend(neighbors.iter().copied());
            }
        }
    }
    for state in states {
        if !visited.contains(&state.id()) {
            return Err(ValidationError::IsolatedState(state.name().to_string()));
        }
    }

    Ok(())
}
