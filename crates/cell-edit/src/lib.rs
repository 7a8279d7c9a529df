//! Cell Edit State Machine
//!
//! Tracks the single table cell that is in edit mode.
//! Double-click begins, typing stages, blur/Enter commits, Escape cancels.
//! A commit is only produced when the staged value differs from the original.

/// A finished edit that changed the cell value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit<Id, Key> {
    pub id: Id,
    pub key: Key,
    pub value: String,
}

/// Edit state for a whole table (at most one cell at a time)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellEdit<Id, Key> {
    /// No cell is being edited
    Viewing,
    /// Cell (id, key) is being edited
    Editing {
        id: Id,
        key: Key,
        /// Field value when editing started
        original: String,
        /// In-progress value
        staged: String,
    },
}

impl<Id, Key> Default for CellEdit<Id, Key> {
    fn default() -> Self {
        CellEdit::Viewing
    }
}

impl<Id, Key> CellEdit<Id, Key>
where
    Id: Copy + PartialEq,
    Key: Copy + PartialEq,
{
    pub fn new() -> Self {
        CellEdit::Viewing
    }

    /// Start editing (id, key) with `current` as the staged value.
    ///
    /// Any other cell in edit mode is committed first; its commit is returned
    /// when its value changed.
    pub fn begin(&mut self, id: Id, key: Key, current: &str) -> Option<Commit<Id, Key>> {
        if self.is_editing(id, key) {
            return None;
        }
        let previous = self.commit();
        *self = CellEdit::Editing {
            id,
            key,
            original: current.to_string(),
            staged: current.to_string(),
        };
        previous
    }

    /// Replace the staged value. Ignored while viewing.
    pub fn stage(&mut self, value: impl Into<String>) {
        if let CellEdit::Editing { staged, .. } = self {
            *staged = value.into();
        }
    }

    /// Leave edit mode, returning a commit if the value changed
    pub fn commit(&mut self) -> Option<Commit<Id, Key>> {
        match std::mem::replace(self, CellEdit::Viewing) {
            CellEdit::Editing { id, key, original, staged } if staged != original => {
                Some(Commit { id, key, value: staged })
            }
            _ => None,
        }
    }

    /// Leave edit mode and discard the staged value
    pub fn cancel(&mut self) {
        *self = CellEdit::Viewing;
    }

    pub fn is_editing(&self, id: Id, key: Key) -> bool {
        matches!(self, CellEdit::Editing { id: i, key: k, .. } if *i == id && *k == key)
    }

    /// The (id, key) under edit, if any
    pub fn target(&self) -> Option<(Id, Key)> {
        match self {
            CellEdit::Editing { id, key, .. } => Some((*id, *key)),
            CellEdit::Viewing => None,
        }
    }

    pub fn staged(&self) -> Option<&str> {
        match self {
            CellEdit::Editing { staged, .. } => Some(staged.as_str()),
            CellEdit::Viewing => None,
        }
    }
}
