//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::{Change, Collection};
use crate::error::ApiResult;
use crate::sync;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows mirroring the backend
    pub todos: Collection,
    /// First load has succeeded
    pub loaded: bool,
    /// A load attempt failed and the next one is scheduled
    pub waking: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the collection after a successful load
pub fn store_set_loaded(store: &AppStore, todos: Collection) {
    store.todos().set(todos);
    store.waking().set(false);
    store.loaded().set(true);
}

pub fn store_set_waking(store: &AppStore) {
    store.waking().set(true);
}

/// Apply a confirmed change
pub fn store_apply(store: &AppStore, change: Change) {
    store.todos().write().apply(change);
}

/// Apply a finished update/delete of `id`, flagging it on failure
pub fn store_settle(store: &AppStore, id: u32, result: ApiResult<Change>) {
    sync::settle(&mut store.todos().write(), id, result);
}
