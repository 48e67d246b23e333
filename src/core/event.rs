//! Events exchanged between an automaton and its environment.
//!
//! An event is an atomic input or output signal. Events are immutable
//! values created through a factory; identity lives in the numeric id
//! alone, so two events with the same id are the same event regardless
//! of display name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An atomic input or output signal.
///
/// # Example
///
/// ```rust
/// use automa::core::Event;
///
/// let e1 = Event::create(1, "open");
/// let e2 = Event::create(1, "open_renamed");
///
/// // Identity is the id, not the name.
/// assert_eq!(e1, e2);
/// assert_eq!(e1.to_string(), "open");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    id: u32,
    name: String,
}

impl Event {
    /// Create a new event. Id and name are set exactly once; there are
    /// no setters.
    pub fn create(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Unique identifier of the event.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name of the event.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
