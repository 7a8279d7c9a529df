//! Editable Cell Component
//!
//! One table cell: text while viewing, a focused input while editing.

use cell_edit::{CellEdit, Commit};
use leptos::html::Input;
use leptos::prelude::*;

use crate::models::TodoField;

/// Table-wide edit state (one cell at a time)
pub type TodoEdit = CellEdit<u32, TodoField>;
/// A changed cell value
pub type TodoCommit = Commit<u32, TodoField>;

/// Double-click to edit, Enter or blur to commit, Escape to cancel
#[component]
pub fn EditableCell(
    id: u32,
    field: TodoField,
    /// Current server-confirmed value
    #[prop(into)] value: Signal<String>,
    edit: RwSignal<TodoEdit>,
    #[prop(into)] on_commit: Callback<TodoCommit>,
) -> impl IntoView {
    let is_editing = Memo::new(move |_| edit.with(|e| e.is_editing(id, field)));
    let input_ref = NodeRef::<Input>::new();

    // autofocus
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let begin = move |_: web_sys::MouseEvent| {
        let current = value.get_untracked();
        // Starting here closes any other open cell
        if let Some(flushed) = edit.try_update(|e| e.begin(id, field, &current)).flatten() {
            on_commit.run(flushed);
        }
    };

    let commit = move || {
        if let Some(commit) = edit.try_update(|e| e.commit()).flatten() {
            on_commit.run(commit);
        }
    };

    view! {
        <td class="td" on:dblclick=begin>
            {move || if is_editing.get() {
                let staged = edit.with_untracked(|e| e.staged().unwrap_or_default().to_string());
                view! {
                    <input
                        node_ref=input_ref
                        class="input"
                        prop:value=staged
                        on:input=move |ev| edit.update(|e| e.stage(event_target_value(&ev)))
                        on:blur=move |_| commit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => {
                                    if let Some(input) = input_ref.get() {
                                        let _ = input.blur();
                                    }
                                }
                                "Escape" => edit.update(|e| e.cancel()),
                                _ => {}
                            }
                        }
                    />
                }.into_any()
            } else {
                value.get().into_any()
            }}
        </td>
    }
}
