//! Filter Bar Component
//!
//! All / Pending / Completed selector buttons.

use leptos::prelude::*;
use todo_core::Filter;

use crate::context::AppContext;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_active = move || ctx.ui.with(|state| state.filter == filter);
                view! {
                    <button
                        class=move || if is_active() { "filterBtn active" } else { "filterBtn" }
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.dispatch(|ctl, state| ctl.on_filter_change(state, filter))
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
