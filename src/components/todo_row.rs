//! Todo Row Component
//!
//! One rendered todo with edit, delete and (while pending) complete buttons.

use leptos::prelude::*;
use todo_core::RowView;

use crate::context::AppContext;

#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let mut class = String::from("todo-item");
    if row.completed { class.push_str(" todo-done"); }
    if row.editing { class.push_str(" editing"); }

    let edit_id = row.id.clone();
    let delete_id = row.id.clone();
    let complete_id = row.id.clone();

    view! {
        <li class=class data-id=row.id.to_string()>
            <span>{row.text}</span>
            <div class="btn-wrapper">
                <button
                    class="editBtn"
                    on:click=move |_| ctx.dispatch(|ctl, state| ctl.on_start_edit(state, &edit_id))
                >
                    "✏️"
                </button>
                <button
                    class="deleteBtn"
                    on:click=move |_| ctx.dispatch(|ctl, state| ctl.on_delete(state, &delete_id))
                >
                    "🗑️"
                </button>
                {row.can_complete.then(move || view! {
                    <button
                        class="completeBtn"
                        on:click=move |_| ctx.dispatch(|ctl, state| ctl.on_complete(state, &complete_id))
                    >
                        "✅"
                    </button>
                })}
            </div>
        </li>
    }
}
