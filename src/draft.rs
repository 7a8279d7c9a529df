//! Creation Form Draft
//!
//! Working copy of a new row. Every field must be filled before submit.

use crate::error::DraftError;
use crate::models::{NewTodo, TodoField};

/// Upper bound (exclusive) for placeholder ids
pub const PLACEHOLDER_RANGE: u32 = 100_000;

/// A submitted draft waiting for the backend to assign an id
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTodo {
    /// Client-side only, never sent
    pub placeholder: u32,
    pub todo: NewTodo,
}

impl PendingTodo {
    /// Drop the placeholder and keep the request payload
    pub fn into_payload(self) -> NewTodo {
        self.todo
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    fields: NewTodo,
}

impl TodoDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: TodoField, value: impl Into<String>) {
        *self.fields.field_mut(field) = value.into();
    }

    pub fn field(&self, field: TodoField) -> &str {
        self.fields.field(field)
    }

    /// Fields that are empty after trimming
    pub fn missing_fields(&self) -> Vec<TodoField> {
        TodoField::ALL
            .into_iter()
            .filter(|f| self.fields.field(*f).trim().is_empty())
            .collect()
    }

    /// Validate and take the draft, leaving it empty.
    ///
    /// On error the draft is untouched.
    pub fn submit(&mut self, placeholder: u32) -> Result<PendingTodo, DraftError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }
        Ok(PendingTodo {
            placeholder: placeholder % PLACEHOLDER_RANGE,
            todo: std::mem::take(&mut self.fields),
        })
    }
}

/// Random placeholder in `[0, PLACEHOLDER_RANGE)`
pub fn random_placeholder() -> u32 {
    (js_sys::Math::random() * f64::from(PLACEHOLDER_RANGE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TodoDraft {
        let mut draft = TodoDraft::new();
        for field in TodoField::ALL {
            draft.set_field(field, format!("{} value", field.key()));
        }
        draft
    }

    #[test]
    fn test_submit_empty_draft_is_rejected() {
        let mut draft = TodoDraft::new();
        let err = draft.submit(42).unwrap_err();
        assert_eq!(err, DraftError::MissingFields(TodoField::ALL.to_vec()));
        assert_eq!(draft, TodoDraft::new());
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut draft = filled();
        draft.set_field(TodoField::Env, "   ");
        let before = draft.clone();
        let err = draft.submit(1).unwrap_err();
        assert_eq!(err, DraftError::MissingFields(vec![TodoField::Env]));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_submit_takes_fields_and_resets() {
        let mut draft = filled();
        let pending = draft.submit(123_456).unwrap();
        assert_eq!(pending.placeholder, 23_456);
        assert_eq!(pending.todo.content, "content value");
        assert_eq!(draft, TodoDraft::new());
        assert_eq!(draft.field(TodoField::Number), "");
    }

    #[test]
    fn test_payload_excludes_placeholder() {
        let mut draft = filled();
        let pending = draft.submit(77).unwrap();
        let json = serde_json::to_value(pending.into_payload()).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("placeholder").is_none());
        assert_eq!(json["number"], "number value");
    }
}
