//! Automa: labeled non-deterministic finite automata as executable
//! behavioral specifications.
//!
//! An automaton is a set of states and event-triggered transitions, each
//! transition optionally consuming an input event and emitting an ordered
//! sequence of output events, tagged with observability and relevance
//! labels. Construction validates the whole structure as a unit; execution
//! exposes non-determinism instead of resolving it.
//!
//! # Core Concepts
//!
//! - **Value types**: [`Event`], [`State`], [`Label`] and [`Transition`]
//!   are immutable values with a single explicit identity key (the id)
//! - **Validated construction**: [`Automaton::create`] either yields a
//!   structurally valid automaton or a specific [`ValidationError`]
//! - **Branch-exposing stepping**: [`Automaton::step`] returns Blocked,
//!   a committed deterministic step, or one [`Branch`] per enabled
//!   transition for the caller to explore and commit
//!
//! # Example
//!
//! ```rust
//! use automa::{Automaton, Event, Label, State, StepOutcome, Transition};
//! use std::collections::HashSet;
//!
//! let a = State::create(0, "A");
//! let b = State::create(1, "B");
//! let e1 = Event::create(1, "e1");
//! let e2 = Event::create(2, "e2");
//!
//! let t1 = Transition::create(
//!     "t1", a.clone(), b.clone(), Some(e1.clone()), vec![e2.clone()],
//!     Label::observability("o"), Label::relevance("r"),
//! );
//! let t2 = Transition::create(
//!     "t2", b.clone(), b.clone(), Some(e2.clone()), vec![],
//!     Label::observability("o"), Label::relevance("r"),
//! );
//!
//! let mut automaton =
//!     Automaton::create(1, "demo", vec![a.clone(), b], vec![t1, t2], a).unwrap();
//!
//! let available: HashSet<Event> = [e1].into_iter().collect();
//! let outcome = automaton.step(&available).unwrap();
//! assert!(matches!(outcome, StepOutcome::Stepped(_)));
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError, TransitionBuilder};
pub use core::{Event, ExecutionTrace, Label, LabelKind, State, StepRecord, Transition};
pub use engine::{
    Automaton, Branch, ExecutionError, OutputOverflow, Step, StepOutcome, ValidationError,
    DEFAULT_OUTPUT_BOUND,
};
