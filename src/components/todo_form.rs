//! Todo Form Component
//!
//! Input field plus primary button. The button adds while idle and
//! updates while editing; a cancel button shows only while editing.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="todo-form">
            <input
                id="todo-input"
                type="text"
                placeholder="What needs doing?"
                prop:value=move || ctx.ui.with(|state| state.input.clone())
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ctx.submit();
                    }
                }
            />
            <button id="addBtn" on:click=move |_| ctx.submit()>
                {move || ctx.ui.with(|state| state.primary_label())}
            </button>
            <Show when=move || ctx.ui.with(|state| state.shows_cancel())>
                <button
                    id="cancelBtn"
                    class="cancelBtn"
                    on:click=move |_| ctx.dispatch(|ctl, state| ctl.on_cancel_edit(state))
                >
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
