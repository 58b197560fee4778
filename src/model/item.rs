// File: ./src/model/item.rs
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a to-do item. Random v4, so two items created in the
/// same clock tick still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry of the list.
///
/// Fields are read-only from the outside: text and id never change after
/// creation, and completion only changes through [`TodoItem::toggled`],
/// which hands back a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: TodoId,
    text: String,
    completed: bool,
    created: DateTime<Utc>,
}

impl TodoItem {
    /// Returns `None` when `text` is blank after trimming.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            id: TodoId::new(),
            text: trimmed.to_string(),
            completed: false,
            created: Utc::now(),
        })
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Copy of this item with `completed` negated.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
