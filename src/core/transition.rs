//! Transitions: the labeled edges of an automaton graph.

use super::event::Event;
use super::label::Label;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A directed edge between two states.
///
/// A transition fires when the automaton sits in its source state and its
/// input event (if any) is available; firing moves the automaton to the
/// target state and emits the output events in order. A transition with no
/// input event is unconditional: it is enabled whenever the automaton is in
/// its source state.
///
/// The output sequence is ordered and duplicate-free (by [`Event`]
/// equality, i.e. by id). It can be edited with [`add_output_event`] and
/// [`remove_output_event`] until the transition is handed to an
/// [`Automaton`](crate::engine::Automaton), which takes ownership and
/// freezes it.
///
/// Identity is the transition id; two transitions with the same id are the
/// same transition.
///
/// [`add_output_event`]: Transition::add_output_event
/// [`remove_output_event`]: Transition::remove_output_event
///
/// # Example
///
/// ```rust
/// use automa::core::{Event, Label, State, Transition};
///
/// let a = State::create(0, "A");
/// let b = State::create(1, "B");
/// let e1 = Event::create(1, "e1");
/// let e2 = Event::create(2, "e2");
///
/// let t = Transition::create(
///     "t1",
///     a,
///     b,
///     Some(e1),
///     vec![e2],
///     Label::observability("o"),
///     Label::relevance("r"),
/// );
///
/// assert_eq!(t.to_string(), "t1: A -> B [e1/{e2}] oss: o, ril: r");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transition {
    id: String,
    source: State,
    target: State,
    input: Option<Event>,
    outputs: Vec<Event>,
    observability: Label,
    relevance: Label,
}

impl Transition {
    /// Create a new transition.
    ///
    /// The supplied output sequence is deduplicated, keeping the first
    /// occurrence of each event and preserving order otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: impl Into<String>,
        source: State,
        target: State,
        input: Option<Event>,
        outputs: Vec<Event>,
        observability: Label,
        relevance: Label,
    ) -> Self {
        let mut transition = Self {
            id: id.into(),
            source,
            target,
            input,
            outputs: Vec::with_capacity(outputs.len()),
            observability,
            relevance,
        };
        for event in outputs {
            transition.add_output_event(event);
        }
        transition
    }

    /// Unique identifier of the transition.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source state of the edge.
    pub fn source(&self) -> &State {
        &self.source
    }

    /// Target state of the edge.
    pub fn target(&self) -> &State {
        &self.target
    }

    /// Input event, or `None` for an unconditional transition.
    pub fn input(&self) -> Option<&Event> {
        self.input.as_ref()
    }

    /// Output events emitted when the transition fires, in order.
    pub fn outputs(&self) -> &[Event] {
        &self.outputs
    }

    /// Observability label.
    pub fn observability(&self) -> &Label {
        &self.observability
    }

    /// Relevance label.
    pub fn relevance(&self) -> &Label {
        &self.relevance
    }

    /// Append `event` to the output sequence unless an equal event is
    /// already present. No-op otherwise.
    pub fn add_output_event(&mut self, event: Event) {
        if !self.contains_output_event(&event) {
            self.outputs.push(event);
        }
    }

    /// Remove the first occurrence of `event` from the output sequence.
    /// Returns whether a removal happened.
    pub fn remove_output_event(&mut self, event: &Event) -> bool {
        match self.outputs.iter().position(|e| e == event) {
            Some(index) => {
                self.outputs.remove(index);
                true
            }
            None => false,
        }
    }

    /// Membership test on the output sequence, by [`Event`] equality.
    pub fn contains_output_event(&self, event: &Event) -> bool {
        self.outputs.contains(event)
    }
}

impl PartialEq for Transition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transition {}

impl Hash for Transition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Fixed rendering contract consumed by reporting and serialization
/// collaborators:
/// `"<id>: <source> -> <target> [<input>/{<outputs, ...>}] oss: <obs>, ril: <rel>"`.
/// An absent input renders as the empty string before the `/`; an empty
/// output sequence renders as `{}`.
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.input.as_ref().map(Event::name).unwrap_or_default();
        let outputs = self
            .outputs
            .iter()
            .map(Event::name)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{}: {} -> {} [{}/{{{}}}] oss: {}, ril: {}",
            self.id, self.source, self.target, input, outputs, self.observability, self.relevance
        )
    }
}
