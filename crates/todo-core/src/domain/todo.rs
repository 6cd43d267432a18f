//! Todo Entity
//!
//! A single task record with text, completion flag and opaque id.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Opaque todo identifier
///
/// Stored as a plain JSON string so ids written by older versions of the
/// page keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item as persisted in the `todos` slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, never reassigned
    pub id: TodoId,
    /// Trimmed, non-empty display text
    #[serde(rename = "todoText")]
    pub text: String,
    /// Completion status (one-way: false -> true)
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Create a new pending item
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Mark as completed. There is no way back.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

impl Entity for TodoItem {
    type Id = TodoId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
