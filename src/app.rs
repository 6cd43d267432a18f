//! Todo List App
//!
//! Root component: input form, filter bar and the todo list.

use leptos::prelude::*;
use todo_core::{TodoConfig, UiState};

use crate::context::AppContext;
use crate::components::{FilterBar, TodoForm, TodoList};

#[component]
pub fn App() -> impl IntoView {
    let config = TodoConfig::default();

    // State
    let ui = signal(UiState::default());
    let reload_trigger = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new(ui, reload_trigger, &config);
    provide_context(ctx);
    log::info!("Todo list mounted, storage slot '{}'", config.storage_key);

    view! {
        <div class="container">
            <h1>"Todo List"</h1>

            <TodoForm />

            <FilterBar />

            <TodoList />
        </div>
    }
}
