//! Todo List Component
//!
//! Rebuilds the whole list from storage whenever the filter, the edit
//! target or the stored todos change.

use leptos::prelude::*;
use todo_core::{RenderedList, UiState};

use crate::context::AppContext;
use crate::components::TodoRow;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    // Typing in the input shouldn't rebuild the list
    let list_state = Memo::new(move |_| {
        ctx.ui.with(|state| UiState {
            input: String::new(),
            ..state.clone()
        })
    });

    let rendered = move || match ctx.rendered(&list_state.get()) {
        RenderedList::Empty(message) => view! {
            <p class="empty-state">{message}</p>
        }.into_any(),
        RenderedList::Rows(rows) => rows
            .into_iter()
            .map(|row| view! { <TodoRow row=row /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <ul id="todo-container">
            {rendered}
        </ul>
    }
}
