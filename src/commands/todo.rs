//! Todo Commands
//!
//! `/todos` REST calls.

use async_trait::async_trait;

use super::{read_json, send, to_body};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{NewTodo, Todo};
use crate::sync::TodoBackend;

// ========================
// Commands
// ========================

pub async fn list_todos(config: &AppConfig) -> ApiResult<Vec<Todo>> {
    let resp = send("GET", &config.todos_url(), None).await?;
    // The backend encodes an empty table as `null`
    let todos: Option<Vec<Todo>> = read_json(&resp).await?;
    Ok(todos.unwrap_or_default())
}

pub async fn create_todo(config: &AppConfig, todo: &NewTodo) -> ApiResult<Todo> {
    let resp = send("POST", &config.todos_url(), Some(to_body(todo)?)).await?;
    read_json(&resp).await
}

pub async fn update_todo(config: &AppConfig, todo: &Todo) -> ApiResult<()> {
    send("PUT", &config.todo_url(todo.id), Some(to_body(todo)?)).await?;
    Ok(())
}

pub async fn delete_todo(config: &AppConfig, id: u32) -> ApiResult<()> {
    send("DELETE", &config.todo_url(id), None).await?;
    Ok(())
}

// ========================
// Backend
// ========================

/// `TodoBackend` over HTTP
#[derive(Clone, Debug)]
pub struct HttpBackend {
    config: AppConfig,
}

impl HttpBackend {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl TodoBackend for HttpBackend {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        list_todos(&self.config).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<Todo> {
        create_todo(&self.config, todo).await
    }

    async fn update_todo(&self, todo: &Todo) -> ApiResult<()> {
        update_todo(&self.config, todo).await
    }

    async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        delete_todo(&self.config, id).await
    }
}
