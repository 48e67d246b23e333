//! Execution trace of committed steps.
//!
//! Provides immutable tracking of the steps an automaton has committed
//! over time. The trace is pure data: recording returns a new trace
//! instead of mutating the existing one.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed step.
///
/// Steps are immutable values: the transition that fired, the states it
/// moved between, the outputs it emitted and when it was committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Id of the transition that fired.
    pub transition: String,
    /// State the automaton moved from.
    pub from: State,
    /// State the automaton moved to.
    pub to: State,
    /// Output events emitted, in order.
    pub outputs: Vec<Event>,
    /// When the step was committed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered trace of committed steps.
///
/// # Example
///
/// ```rust
/// use automa::core::{ExecutionTrace, State, StepRecord};
/// use chrono::Utc;
///
/// let trace = ExecutionTrace::new();
/// let trace = trace.record(StepRecord {
///     transition: "t1".to_string(),
///     from: State::create(0, "A"),
///     to: State::create(1, "B"),
///     outputs: vec![],
///     timestamp: Utc::now(),
/// });
///
/// let path = trace.path();
/// assert_eq!(path.len(), 2); // A -> B
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    steps: Vec<StepRecord>,
}

impl ExecutionTrace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new trace. The original is unchanged.
    pub fn record(&self, step: StepRecord) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// The path of states traversed: the starting state, then the target
    /// of each committed step.
    pub fn path(&self) -> Vec<&State> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Total duration from the first to the last committed step, or
    /// `None` for an empty trace.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded steps, in order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(transition: &str, from: u32, to: u32) -> StepRecord {
        StepRecord {
            transition: transition.to_string(),
            from: State::create(from, format!("s{from}")),
            to: State::create(to, format!("s{to}")),
            outputs: vec![Event::create(1, "out")],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace = ExecutionTrace::new();
        assert!(trace.steps().is_empty());
        assert!(trace.path().is_empty());
        assert!(trace.duration().is_none());
    }

    #[test]
    fn record_is_pure() {
        let trace = ExecutionTrace::new();
        let recorded = trace.record(step("t1", 0, 1));

        assert!(trace.steps().is_empty());
        assert_eq!(recorded.steps().len(), 1);
    }

    #[test]
    fn path_includes_starting_state() {
        let trace = ExecutionTrace::new()
            .record(step("t1", 0, 1))
            .record(step("t2", 1, 2));

        let path = trace.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].id(), 0);
        assert_eq!(path[1].id(), 1);
        assert_eq!(path[2].id(), 2);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let trace = ExecutionTrace::new().record(step("t1", 0, 1));
        std::thread::sleep(Duration::from_millis(10));
        let trace = trace.record(step("t2", 1, 2));

        assert!(trace.duration().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = ExecutionTrace::new().record(step("t1", 0, 1));
        let json = serde_json::to_string(&trace).unwrap();
        let back: ExecutionTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace.steps().len(), back.steps().len());
        assert_eq!(back.steps()[0].transition, "t1");
    }
}
