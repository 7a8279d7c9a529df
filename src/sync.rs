//! Backend Synchronization
//!
//! List container logic: initial load with retry, and create/update/delete
//! calls that turn server acknowledgments into collection changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::collection::{Change, Collection};
use crate::draft::PendingTodo;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo};

/// REST operations on `/todos`
#[async_trait(?Send)]
pub trait TodoBackend {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>>;
    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<Todo>;
    async fn update_todo(&self, todo: &Todo) -> ApiResult<()>;
    async fn delete_todo(&self, id: u32) -> ApiResult<()>;
}

/// Async delay between load attempts
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Browser timer sleeper
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Stops the load loop once the owning component is gone
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug)]
pub struct TodoSync<B> {
    backend: B,
    retry_interval: Duration,
}

impl<B: TodoBackend> TodoSync<B> {
    pub fn new(backend: B, retry_interval: Duration) -> Self {
        Self { backend, retry_interval }
    }

    /// Fetch the list, retrying at a fixed interval until it succeeds.
    ///
    /// `on_failure` gets the attempt number and error of each failed try.
    /// Returns `None` if cancelled first.
    pub async fn load_until_ready<S, F>(
        &self,
        sleeper: &S,
        cancel: &CancelToken,
        mut on_failure: F,
    ) -> Option<Collection>
    where
        S: Sleeper + ?Sized,
        F: FnMut(u32, &ApiError),
    {
        let mut attempt = 0u32;
        loop {
            if cancel.is_cancelled() {
                tracing::debug!(attempt, "todo load cancelled");
                return None;
            }
            attempt += 1;
            match self.backend.list_todos().await {
                Ok(todos) => {
                    if cancel.is_cancelled() {
                        return None;
                    }
                    tracing::info!(attempt, count = todos.len(), "loaded todos");
                    return Some(Collection::from_server(todos));
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        retry_secs = self.retry_interval.as_secs(),
                        "todo load failed, server may be waking up"
                    );
                    on_failure(attempt, &e);
                }
            }
            sleeper.sleep(self.retry_interval).await;
        }
    }

    /// POST the draft without its placeholder
    pub async fn create(&self, pending: PendingTodo) -> ApiResult<Change> {
        let placeholder = pending.placeholder;
        let payload = pending.into_payload();
        match self.backend.create_todo(&payload).await {
            Ok(saved) => {
                tracing::info!(placeholder, id = saved.id, "todo created");
                Ok(Change::Appended(saved))
            }
            Err(e) => {
                tracing::error!(placeholder, error = %e, "create failed");
                Err(e)
            }
        }
    }

    /// PUT the full record
    pub async fn update(&self, todo: Todo) -> ApiResult<Change> {
        match self.backend.update_todo(&todo).await {
            Ok(()) => {
                tracing::debug!(id = todo.id, "todo updated");
                Ok(Change::Replaced(todo))
            }
            Err(e) => {
                tracing::warn!(id = todo.id, error = %e, "update failed");
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: u32) -> ApiResult<Change> {
        match self.backend.delete_todo(id).await {
            Ok(()) => {
                tracing::debug!(id, "todo deleted");
                Ok(Change::Removed(id))
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "delete failed");
                Err(e)
            }
        }
    }
}

/// Apply a finished update or delete of row `id`.
///
/// Success applies the change; failure leaves the row as-is and flags it unsynced.
/// The error itself is logged by `TodoSync`.
pub fn settle(collection: &mut Collection, id: u32, result: ApiResult<Change>) {
    match result {
        Ok(change) => collection.apply(change),
        Err(_) => collection.mark_unsynced(id),
    }
}
