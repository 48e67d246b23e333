//! Automaton construction and the branch-exposing execution engine.
//!
//! Construction validates the state and transition sets as a unit and
//! either yields a structurally valid [`Automaton`] or a specific
//! [`ValidationError`]; nothing partially built ever escapes. Execution
//! is a single primitive, [`Automaton::step`], whose outcome enumerates
//! exactly what happened: blocked, stepped, or branched. Non-determinism
//! is exposed, never silently resolved.

mod automaton;
mod error;
mod outcome;

pub use automaton::{Automaton, DEFAULT_OUTPUT_BOUND};
pub use error::{ExecutionError, OutputOverflow, ValidationError};
pub use outcome::{Branch, Step, StepOutcome};
