//! Todo Row Component
//!
//! Five editable cells and a delete button.
//! Each cell reads its own value from the store, so a write elsewhere
//! does not rebuild an open editor.

use leptos::prelude::*;

use crate::components::{EditableCell, TodoCommit, TodoEdit};
use crate::context::use_app_context;
use crate::models::TodoField;
use crate::store::AppStateStoreFields;

#[component]
pub fn TodoRow(
    id: u32,
    edit: RwSignal<TodoEdit>,
    #[prop(into)] on_commit: Callback<TodoCommit>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let store = use_app_context().store;
    // Last update/delete of this row failed
    let unsynced = Memo::new(move |_| store.todos().with(|todos| todos.is_unsynced(id)));

    view! {
        <tr class=move || if unsynced.get() { "row row-unsynced" } else { "row" }>
            {TodoField::ALL.into_iter().map(|field| {
                let value = Memo::new(move |_| {
                    store.todos().with(|todos| {
                        todos.get(id).map(|t| t.field(field).to_string()).unwrap_or_default()
                    })
                });
                view! {
                    <EditableCell id=id field=field value=value edit=edit on_commit=on_commit />
                }
            }).collect_view()}
            <td class="td td-actions">
                <button on:click=move |_| on_delete.run(id)>"削除"</button>
            </td>
        </tr>
    }
}
