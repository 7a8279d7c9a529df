//! Application Context
//!
//! Backend operations provided via Leptos Context API.
//! Each operation runs as a local task and reconciles the store when it finishes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpBackend;
use crate::draft::PendingTodo;
use crate::models::Todo;
use crate::store::{store_apply, store_settle, AppStore};
use crate::sync::TodoSync;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    pub store: AppStore,
    pub sync: TodoSync<HttpBackend>,
}

impl AppContext {
    pub fn new(store: AppStore, sync: TodoSync<HttpBackend>) -> Self {
        Self { store, sync }
    }

    /// POST a submitted draft; failures interrupt the user
    pub fn create(&self, pending: PendingTodo) {
        let store = self.store;
        let sync = self.sync.clone();
        spawn_local(async move {
            match sync.create(pending).await {
                Ok(change) => store_apply(&store, change),
                Err(e) => alert(&format!("保存失敗: {}", e.user_message())),
            }
        });
    }

    /// PUT an edited row; failures only flag the row
    pub fn update(&self, todo: Todo) {
        let store = self.store;
        let sync = self.sync.clone();
        let id = todo.id;
        spawn_local(async move {
            let result = sync.update(todo).await;
            store_settle(&store, id, result);
        });
    }

    pub fn delete(&self, id: u32) {
        let store = self.store;
        let sync = self.sync.clone();
        spawn_local(async move {
            let result = sync.delete(id).await;
            store_settle(&store, id, result);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
