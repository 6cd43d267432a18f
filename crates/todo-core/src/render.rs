//! Render Projection
//!
//! Turns stored todos plus UI state into what the list container shows.
//! The view layer rebuilds the whole list from this every time.

use crate::controller::{EditMode, UiState};
use crate::domain::{TodoId, TodoItem};
use crate::filter::filter_todos;

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Complete control is shown only for pending items
    pub can_complete: bool,
    /// Row is the current edit target
    pub editing: bool,
}

/// Full content of the list container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedList {
    /// Nothing passes the filter; message depends on the filter
    Empty(&'static str),
    Rows(Vec<RowView>),
}

impl RenderedList {
    pub fn rows(&self) -> &[RowView] {
        match self {
            RenderedList::Empty(_) => &[],
            RenderedList::Rows(rows) => rows,
        }
    }
}

/// Project `todos` through the active filter
pub fn render(todos: &[TodoItem], state: &UiState) -> RenderedList {
    let visible = filter_todos(todos, state.filter);
    if visible.is_empty() {
        return RenderedList::Empty(state.filter.empty_message());
    }

    let rows = visible
        .into_iter()
        .map(|todo| {
            let editing = matches!(&state.edit_mode, EditMode::Editing(id) if *id == todo.id);
            RowView {
                can_complete: !todo.completed,
                editing,
                id: todo.id,
                text: todo.text,
                completed: todo.completed,
            }
        })
        .collect();
    RenderedList::Rows(rows)
}
