//! Frontend Models
//!
//! Data structures matching the backend's `/todos` resource.

use serde::{Deserialize, Serialize};

/// One persisted procedure row (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub env: String,
    #[serde(default)]
    pub expected: String,
    /// Server-owned, carried through PUT unchanged
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Todo {
    pub fn field(&self, field: TodoField) -> &str {
        match field {
            TodoField::Number => &self.number,
            TodoField::Category => &self.category,
            TodoField::Content => &self.content,
            TodoField::Env => &self.env,
            TodoField::Expected => &self.expected,
        }
    }

    /// Copy of this record with one field replaced
    pub fn with_field(&self, field: TodoField, value: impl Into<String>) -> Todo {
        let mut todo = self.clone();
        let value = value.into();
        match field {
            TodoField::Number => todo.number = value,
            TodoField::Category => todo.category = value,
            TodoField::Content => todo.content = value,
            TodoField::Env => todo.env = value,
            TodoField::Expected => todo.expected = value,
        }
        todo
    }
}

/// POST payload. Has no id: the backend assigns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub number: String,
    pub category: String,
    pub content: String,
    pub env: String,
    pub expected: String,
}

impl NewTodo {
    pub fn field(&self, field: TodoField) -> &str {
        match field {
            TodoField::Number => &self.number,
            TodoField::Category => &self.category,
            TodoField::Content => &self.content,
            TodoField::Env => &self.env,
            TodoField::Expected => &self.expected,
        }
    }

    pub fn field_mut(&mut self, field: TodoField) -> &mut String {
        match field {
            TodoField::Number => &mut self.number,
            TodoField::Category => &mut self.category,
            TodoField::Content => &mut self.content,
            TodoField::Env => &mut self.env,
            TodoField::Expected => &mut self.expected,
        }
    }
}

/// The five editable columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoField {
    Number,
    Category,
    Content,
    Env,
    Expected,
}

impl TodoField {
    pub const ALL: [TodoField; 5] = [
        TodoField::Number,
        TodoField::Category,
        TodoField::Content,
        TodoField::Env,
        TodoField::Expected,
    ];

    /// JSON key, also used as input name and placeholder
    pub fn key(self) -> &'static str {
        match self {
            TodoField::Number => "number",
            TodoField::Category => "category",
            TodoField::Content => "content",
            TodoField::Env => "env",
            TodoField::Expected => "expected",
        }
    }

    /// Column header
    pub fn label(self) -> &'static str {
        match self {
            TodoField::Number => "番号",
            TodoField::Category => "大項目",
            TodoField::Content => "作業内容",
            TodoField::Env => "環境",
            TodoField::Expected => "期待値",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_row() {
        let json = r#"{"id":7,"number":"A1","category":"setup","content":"install",
            "env":"prod","expected":"ok","is_completed":true,
            "created_at":"2026-01-02T03:04:05Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.field(TodoField::Content), "install");
        assert!(todo.is_completed);
        assert_eq!(todo.created_at.as_deref(), Some("2026-01-02T03:04:05Z"));
    }

    #[test]
    fn test_decode_tolerates_missing_server_fields() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"number":"A1"}"#).unwrap();
        assert_eq!(todo.number, "A1");
        assert_eq!(todo.expected, "");
        assert!(!todo.is_completed);
        assert_eq!(todo.created_at, None);
    }

    #[test]
    fn test_with_field_replaces_only_one_field() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"number":"A1","category":"c","content":"old","env":"e","expected":"x","is_completed":true}"#,
        )
        .unwrap();
        let edited = todo.with_field(TodoField::Content, "new text");
        assert_eq!(edited.content, "new text");
        assert_eq!(edited.with_field(TodoField::Content, "old"), todo);
    }

    #[test]
    fn test_new_todo_has_no_id_key() {
        let payload = NewTodo { number: "A1".into(), ..Default::default() };
        let value = serde_json::to_value(&payload).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        assert!(!keys.iter().any(|k| k == "id"));
        for field in TodoField::ALL {
            assert!(value.get(field.key()).is_some());
        }
    }
}
