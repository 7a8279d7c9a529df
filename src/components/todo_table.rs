//! Todo Table Component
//!
//! List container: loads rows (retrying while the backend wakes up),
//! renders the editable table and routes edits and deletes to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewTodoForm, TodoCommit, TodoEdit, TodoRow};
use crate::context::use_app_context;
use crate::models::TodoField;
use crate::store::{store_set_loaded, store_set_waking, AppStateStoreFields};
use crate::sync::{CancelToken, GlooSleeper};

#[component]
pub fn TodoTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let edit = RwSignal::new(TodoEdit::new());

    // Stop retrying once the table is gone
    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Initial load
    Effect::new({
        let sync = ctx.sync.clone();
        move |_| {
            let sync = sync.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                let loaded = sync
                    .load_until_ready(&GlooSleeper, &cancel, |_, _| {
                        if !cancel.is_cancelled() {
                            store_set_waking(&store);
                        }
                    })
                    .await;
                if let Some(todos) = loaded {
                    store_set_loaded(&store, todos);
                }
            });
        }
    });

    let on_commit = Callback::new({
        let ctx = ctx.clone();
        move |commit: TodoCommit| {
            let TodoCommit { id, key, value } = commit;
            let updated = store
                .todos()
                .with_untracked(|todos| todos.get(id).map(|t| t.with_field(key, value)));
            if let Some(todo) = updated {
                ctx.update(todo);
            }
        }
    });

    let on_delete = Callback::new({
        let ctx = ctx.clone();
        move |id: u32| ctx.delete(id)
    });

    view! {
        <div class="container">
            <Show when=move || store.waking().get() && !store.loaded().get()>
                <p class="waking">"サーバーを起動しています…"</p>
            </Show>
            <Show when=move || store.loaded().get()>
                <table class="table">
                    <thead class="thead">
                        <tr>
                            {TodoField::ALL.into_iter().map(|field| view! {
                                <th class="th">{field.label()}</th>
                            }).collect_view()}
                            <th class="th">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.todos().with(|todos| todos.ids())
                            key=|id| *id
                            children=move |id| view! {
                                <TodoRow
                                    id=id
                                    edit=edit
                                    on_commit=on_commit
                                    on_delete=on_delete
                                />
                            }
                        />
                    </tbody>
                    <NewTodoForm />
                </table>
            </Show>
        </div>
    }
}
