//! Procedure Todo App
//!
//! Root component: builds the store and backend handles and provides them as context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpBackend;
use crate::components::TodoTable;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;
use crate::sync::TodoSync;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    tracing::info!(api_url = %config.api_url, "starting procedure todo ui");

    let store = Store::new(AppState::default());
    let sync = TodoSync::new(HttpBackend::new(config.clone()), config.retry_interval);

    // Provide context to all children
    provide_context(AppContext::new(store, sync));

    view! {
        <main class="main-content">
            <h1>"手順書"</h1>
            <TodoTable />
        </main>
    }
}
