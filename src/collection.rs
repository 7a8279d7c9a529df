//! Todo Collection
//!
//! Ordered rows mirroring the backend, keyed by server id.

use std::collections::BTreeSet;

use crate::models::Todo;

/// A server-confirmed change to apply locally
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// POST acknowledged
    Appended(Todo),
    /// PUT acknowledged
    Replaced(Todo),
    /// DELETE acknowledged
    Removed(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    todos: Vec<Todo>,
    /// Rows whose last update or delete failed
    unsynced: BTreeSet<u32>,
}

impl Collection {
    /// Build from a server list; later duplicates of an id are dropped
    pub fn from_server(todos: Vec<Todo>) -> Self {
        let mut collection = Self::default();
        for todo in todos {
            if !collection.contains(todo.id) {
                collection.todos.push(todo);
            }
        }
        collection
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn is_unsynced(&self, id: u32) -> bool {
        self.unsynced.contains(&id)
    }

    /// Flag a row whose server copy may differ
    pub fn mark_unsynced(&mut self, id: u32) {
        if self.contains(id) {
            self.unsynced.insert(id);
        }
    }

    /// Row ids in display order
    pub fn ids(&self) -> Vec<u32> {
        self.todos.iter().map(|t| t.id).collect()
    }

    pub fn apply(&mut self, change: Change) {
        match change {
            Change::Appended(todo) => {
                self.unsynced.remove(&todo.id);
                match self.todos.iter_mut().find(|t| t.id == todo.id) {
                    Some(existing) => *existing = todo,
                    None => self.todos.push(todo),
                }
            }
            // Only rows still present; a late PUT must not revive a deleted row
            Change::Replaced(todo) => {
                if let Some(existing) = self.todos.iter_mut().find(|t| t.id == todo.id) {
                    self.unsynced.remove(&todo.id);
                    *existing = todo;
                }
            }
            Change::Removed(id) => {
                self.todos.retain(|t| t.id != id);
                self.unsynced.remove(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, number: &str) -> Todo {
        Todo {
            id,
            number: number.to_string(),
            category: "cat".to_string(),
            content: format!("content {}", id),
            env: "dev".to_string(),
            expected: "ok".to_string(),
            is_completed: false,
            created_at: None,
        }
    }

    fn ids(collection: &Collection) -> Vec<u32> {
        collection.ids()
    }

    #[test]
    fn test_from_server_keeps_order_and_unique_ids() {
        let collection = Collection::from_server(vec![
            make_todo(3, "C"),
            make_todo(1, "A"),
            make_todo(3, "dup"),
        ]);
        assert_eq!(ids(&collection), vec![3, 1]);
        assert_eq!(collection.get(3).unwrap().number, "C");
    }

    #[test]
    fn test_append_goes_to_end() {
        let mut collection = Collection::from_server(vec![make_todo(1, "A"), make_todo(2, "B")]);
        collection.apply(Change::Appended(make_todo(9, "Z")));
        assert_eq!(ids(&collection), vec![1, 2, 9]);
    }

    #[test]
    fn test_append_existing_id_replaces_in_place() {
        let mut collection = Collection::from_server(vec![make_todo(1, "A"), make_todo(2, "B")]);
        collection.apply(Change::Appended(make_todo(1, "A'")));
        assert_eq!(ids(&collection), vec![1, 2]);
        assert_eq!(collection.get(1).unwrap().number, "A'");
    }

    #[test]
    fn test_replace_and_remove() {
        let mut collection = Collection::from_server(vec![make_todo(1, "A"), make_todo(2, "B")]);
        collection.apply(Change::Replaced(make_todo(2, "B2")));
        assert_eq!(collection.get(2).unwrap().number, "B2");

        collection.apply(Change::Removed(1));
        assert_eq!(ids(&collection), vec![2]);
        collection.apply(Change::Removed(42));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_unsynced_flag_lifecycle() {
        let mut collection = Collection::from_server(vec![make_todo(1, "A")]);
        collection.mark_unsynced(1);
        collection.mark_unsynced(5);
        assert!(collection.is_unsynced(1));
        assert!(!collection.is_unsynced(5));

        collection.apply(Change::Replaced(make_todo(1, "A2")));
        assert!(!collection.is_unsynced(1));

        collection.mark_unsynced(1);
        collection.apply(Change::Removed(1));
        assert!(!collection.is_unsynced(1));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_replace_after_remove_does_not_revive_row() {
        let mut collection = Collection::from_server(vec![make_todo(1, "A"), make_todo(2, "B")]);
        collection.apply(Change::Removed(1));
        collection.apply(Change::Replaced(make_todo(1, "A2")));
        assert_eq!(ids(&collection), vec![2]);
        assert!(!collection.contains(1));
    }

    #[test]
    fn test_replace_keeps_row_order() {
        let mut collection =
            Collection::from_server(vec![make_todo(1, "A"), make_todo(2, "B"), make_todo(3, "C")]);
        collection.mark_unsynced(3);
        collection.apply(Change::Replaced(make_todo(2, "B2")));
        assert_eq!(collection.ids(), vec![1, 2, 3]);
        assert!(collection.is_unsynced(3));
    }
}
