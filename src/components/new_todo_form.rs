//! New Todo Form Component
//!
//! Table footer row for creating a procedure step.

use leptos::prelude::*;

use crate::context::{alert, use_app_context};
use crate::draft::{random_placeholder, TodoDraft};
use crate::models::TodoField;

/// Draft inputs for all five fields plus the add button
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(TodoDraft::new());

    let add_todo = move |_: web_sys::MouseEvent| {
        match draft.try_update(|d| d.submit(random_placeholder())) {
            Some(Ok(pending)) => {
                tracing::debug!(placeholder = pending.placeholder, "submitting draft");
                ctx.create(pending);
            }
            Some(Err(e)) => alert(&e.to_string()),
            None => {}
        }
    };

    view! {
        <tfoot class="tfoot">
            <tr>
                {TodoField::ALL.into_iter().map(|field| view! {
                    <td class="td-form">
                        <input
                            class="input"
                            name=field.key()
                            placeholder=field.key()
                            prop:value=move || draft.with(|d| d.field(field).to_string())
                            on:input=move |ev| draft.update(|d| d.set_field(field, event_target_value(&ev)))
                        />
                    </td>
                }).collect_view()}
                <td class="td-form">
                    <button class="button-add" on:click=add_todo>"追加"</button>
                </td>
            </tr>
        </tfoot>
    }
}
