//! States of an automaton graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A node in the automaton graph.
///
/// States are immutable values created through [`State::create`]. Like
/// [`Event`](crate::core::Event), identity is carried by the id alone:
/// the display name is presentation, not identity.
///
/// # Example
///
/// ```rust
/// use automa::core::State;
///
/// let idle = State::create(0, "Idle");
/// assert_eq!(idle.to_string(), "Idle");
/// assert_eq!(idle, State::create(0, "Idle (renamed)"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct State {
    id: u32,
    name: String,
}

impl State {
    /// Create a new state. Id and name are set exactly once.
    pub fn create(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Unique identifier of the state.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
