//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, Label, State, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use automa::builder::TransitionBuilder;
/// use automa::core::{Event, Label, State};
///
/// let t = TransitionBuilder::new()
///     .id("t1")
///     .from(State::create(0, "A"))
///     .to(State::create(1, "B"))
///     .on(Event::create(1, "e1"))
///     .emit(Event::create(2, "e2"))
///     .observability(Label::observability("o"))
///     .relevance(Label::relevance("r"))
///     .build()
///     .unwrap();
///
/// assert_eq!(t.to_string(), "t1: A -> B [e1/{e2}] oss: o, ril: r");
/// ```
#[derive(Default)]
pub struct TransitionBuilder {
    id: Option<String>,
    from: Option<State>,
    to: Option<State>,
    input: Option<Event>,
    outputs: Vec<Event>,
    observability: Option<Label>,
    relevance: Option<Label>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition id (required).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: State) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: State) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the triggering input event (optional; omit for an
    /// unconditional transition).
    pub fn on(mut self, event: Event) -> Self {
        self.input = Some(event);
        self
    }

    /// Append one output event.
    pub fn emit(mut self, event: Event) -> Self {
        self.outputs.push(event);
        self
    }

    /// Append multiple output events at once.
    pub fn emits(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.outputs.extend(events);
        self
    }

    /// Set the observability label (required).
    pub fn observability(mut self, label: Label) -> Self {
        self.observability = Some(label);
        self
    }

    /// Set the relevance label (required).
    pub fn relevance(mut self, label: Label) -> Self {
        self.relevance = Some(label);
        self
    }

    /// Build the transition.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Transition, BuildError> {
        let id = self.id.ok_or(BuildError::MissingTransitionId)?;
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let observability = self.observability.ok_or(BuildError::MissingObservability)?;
        let relevance = self.relevance.ok_or(BuildError::MissingRelevance)?;

        Ok(Transition::create(
            id,
            from,
            to,
            self.input,
            self.outputs,
            observability,
            relevance,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::new().from(State::create(0, "A")).build();

        assert!(matches!(result, Err(BuildError::MissingTransitionId)));
    }

    #[test]
    fn builder_validates_missing_labels() {
        let result = TransitionBuilder::new()
            .id("t1")
            .from(State::create(0, "A"))
            .to(State::create(1, "B"))
            .build();

        assert!(matches!(result, Err(BuildError::MissingObservability)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .id("t1")
            .from(State::create(0, "A"))
            .to(State::create(1, "B"))
            .on(Event::create(1, "e1"))
            .emits(vec![Event::create(2, "e2"), Event::create(3, "e3")])
            .observability(Label::observability("o"))
            .relevance(Label::relevance("r"))
            .build()
            .unwrap();

        assert_eq!(transition.id(), "t1");
        assert_eq!(transition.source().name(), "A");
        assert_eq!(transition.target().name(), "B");
        assert_eq!(transition.outputs().len(), 2);
    }

    #[test]
    fn duplicate_emits_are_collapsed_at_build() {
        let transition = TransitionBuilder::new()
            .id("t1")
            .from(State::create(0, "A"))
            .to(State::create(1, "B"))
            .emit(Event::create(2, "e2"))
            .emit(Event::create(2, "e2"))
            .observability(Label::observability("o"))
            .relevance(Label::relevance("r"))
            .build()
            .unwrap();

        assert_eq!(transition.outputs().len(), 1);
    }
}
