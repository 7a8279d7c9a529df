//! UI Components
//!
//! Leptos components for the procedure table.

mod editable_cell;
mod new_todo_form;
mod todo_row;
mod todo_table;

pub use editable_cell::{EditableCell, TodoCommit, TodoEdit};
pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_table::TodoTable;
