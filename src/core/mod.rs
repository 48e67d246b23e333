//! Core value types of the automaton model.
//!
//! This module contains the pure data layer:
//! - [`Event`]: input/output signals
//! - [`State`]: nodes of the automaton graph
//! - [`Label`]: observability/relevance classification tags
//! - [`Transition`]: labeled edges with an optional input and an ordered
//!   output sequence
//! - [`ExecutionTrace`]: immutable record of committed steps
//!
//! Everything here is an immutable value created through a factory;
//! identity is always a single explicit key (the id field), never a
//! name-based heuristic.

mod event;
mod label;
mod state;
mod trace;
mod transition;

pub use event::Event;
pub use label::{Label, LabelKind};
pub use state::State;
pub use trace::{ExecutionTrace, StepRecord};
pub use transition::Transition;
