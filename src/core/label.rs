//! Classification labels attached to transitions.
//!
//! Every transition carries two labels: one describing its observability
//! and one describing its relevance. Labels are immutable values; equality
//! is over the id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The two classification axes a label can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    /// Whether the transition is visible to an external observer.
    Observability,
    /// Whether the transition matters for the property under analysis.
    Relevance,
}

/// A classification tag attached to a transition.
///
/// # Example
///
/// ```rust
/// use automa::core::{Label, LabelKind};
///
/// let o = Label::observability("o1");
/// assert_eq!(o.kind(), LabelKind::Observability);
/// assert_eq!(o.to_string(), "o1");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Label {
    id: String,
    kind: LabelKind,
}

impl Label {
    /// Create a new label of the given kind.
    pub fn create(id: impl Into<String>, kind: LabelKind) -> Self {
        Self { id: id.into(), kind }
    }

    /// Shorthand for an observability label.
    pub fn observability(id: impl Into<String>) -> Self {
        Self::create(id, LabelKind::Observability)
    }

    /// Shorthand for a relevance label.
    pub fn relevance(id: impl Into<String>) -> Self {
        Self::create(id, LabelKind::Relevance)
    }

    /// Unique identifier of the label.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The classification axis this label belongs to.
    pub fn kind(&self) -> LabelKind {
        self.kind
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
