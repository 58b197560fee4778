// File: ./src/model/list.rs
// The list state and its transitions
use crate::model::item::{TodoId, TodoItem};
use log::{debug, trace};

/// What a transition did. Front-ends re-read the list after anything other
/// than `Unchanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added(TodoId),
    Toggled(TodoId),
    Deleted(TodoId),
    PendingEdited,
    Unchanged,
}

impl Change {
    pub fn is_change(&self) -> bool {
        !matches!(self, Change::Unchanged)
    }
}

/// In-memory to-do list plus the not-yet-submitted input text.
///
/// Every operation is total: blank input and unknown ids are silently
/// ignored and reported as [`Change::Unchanged`].
#[derive(Debug, Default, Clone)]
pub struct TodoList {
    items: Vec<TodoItem>,
    pending: String,
    revision: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    pub fn set_pending_text(&mut self, value: impl Into<String>) -> Change {
        self.pending = value.into();
        self.bump();
        Change::PendingEdited
    }

    /// Submits the pending text as a new item at the end of the list.
    pub fn add_pending(&mut self) -> Change {
        let Some(item) = TodoItem::new(&self.pending) else {
            trace!("ignoring blank submission");
            return Change::Unchanged;
        };
        let id = item.id();
        debug!("adding item {}: {:?}", id, item.text());
        self.items.push(item);
        self.pending.clear();
        self.bump();
        Change::Added(id)
    }

    pub fn toggle_completed(&mut self, id: TodoId) -> Change {
        let Some(pos) = self.position(id) else {
            trace!("toggle: no item {}", id);
            return Change::Unchanged;
        };
        let next = self.items[pos].toggled();
        debug!("item {} completed={}", id, next.completed());
        self.items[pos] = next;
        self.bump();
        Change::Toggled(id)
    }

    pub fn delete_item(&mut self, id: TodoId) -> Change {
        let Some(pos) = self.position(id) else {
            trace!("delete: no item {}", id);
            return Change::Unchanged;
        };
        // `remove` shifts the tail, keeping relative order
        self.items.remove(pos);
        debug!("deleted item {}", id);
        self.bump();
        Change::Deleted(id)
    }

    /// Current items in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Owned copy of the current items, unaffected by later transitions.
    pub fn snapshot(&self) -> Vec<TodoItem> {
        self.items.clone()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id() == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|t| !t.completed()).count()
    }

    /// Bumped on every effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for t in texts {
            list.set_pending_text(*t);
            list.add_pending();
        }
        list
    }

    #[test]
    fn blank_submission_is_noop() {
        for blank in ["", "   ", "\t\n"] {
            let mut list = list_with(&["Keep"]);
            list.set_pending_text(blank);
            let rev = list.revision();
            assert_eq!(list.add_pending(), Change::Unchanged);
            assert_eq!(list.len(), 1);
            assert_eq!(list.pending_text(), blank);
            assert_eq!(list.revision(), rev);
        }
    }

    #[test]
    fn add_appends_and_clears_pending() {
        let mut list = list_with(&["First"]);
        list.set_pending_text("Buy milk");
        let change = list.add_pending();

        assert_eq!(list.len(), 2);
        let last = &list.items()[1];
        assert_eq!(change, Change::Added(last.id()));
        assert_eq!(last.text(), "Buy milk");
        assert!(!last.completed());
        assert_eq!(list.pending_text(), "");
    }

    #[test]
    fn add_stores_trimmed_text() {
        let list = list_with(&["  padded  "]);
        assert_eq!(list.items()[0].text(), "padded");
    }

    #[test]
    fn toggle_twice_restores() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.items()[1].id();
        let before = list.snapshot();

        assert_eq!(list.toggle_completed(id), Change::Toggled(id));
        assert!(list.items()[1].completed());
        assert_eq!(list.items()[1].id(), id);
        assert!(!list.items()[0].completed());
        assert!(!list.items()[2].completed());

        list.toggle_completed(id);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut list = list_with(&["a", "b"]);
        let before = list.snapshot();
        let stranger = TodoId::new();

        assert_eq!(list.toggle_completed(stranger), Change::Unchanged);
        assert_eq!(list.delete_item(stranger), Change::Unchanged);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn delete_keeps_order() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        let id = list.items()[1].id();

        assert_eq!(list.delete_item(id), Change::Deleted(id));
        let texts: Vec<&str> = list.items().iter().map(|t| t.text()).collect();
        assert_eq!(texts, ["a", "c", "d"]);
        assert!(list.get(id).is_none());

        // second delete of same id does nothing
        assert_eq!(list.delete_item(id), Change::Unchanged);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut list = list_with(&["a"]);
        let snap = list.snapshot();
        let id = snap[0].id();
        list.toggle_completed(id);
        list.delete_item(id);
        assert_eq!(snap.len(), 1);
        assert!(!snap[0].completed());
    }

    #[test]
    fn remaining_counts_open_items() {
        let mut list = list_with(&["a", "b", "c"]);
        assert_eq!(list.remaining(), 3);
        let id = list.items()[0].id();
        list.toggle_completed(id);
        assert_eq!(list.remaining(), 2);
    }
}
