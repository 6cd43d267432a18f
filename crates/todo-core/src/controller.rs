//! View-Controller
//!
//! Edit-mode state machine and action handlers. UI state is an explicit
//! value: every handler takes the current `UiState` and returns the next
//! one, mutating the store along the way. Nothing is read back from the
//! rendered page.

use crate::domain::{Filter, TodoError, TodoId, TodoResult};
use crate::id::IdGenerator;
use crate::render::{render, RenderedList};
use crate::repository::{KeyValueStorage, TodoStore};

/// Label of the primary button while idle
pub const ADD_LABEL: &str = "Add Todo";
/// Label of the primary button while editing
pub const UPDATE_LABEL: &str = "Update Todo";

/// Whether the input field targets a new or an existing item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(TodoId),
}

/// Transient per-session UI state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub filter: Filter,
    pub edit_mode: EditMode,
    /// Current contents of the input field
    pub input: String,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        matches!(self.edit_mode, EditMode::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&TodoId> {
        match &self.edit_mode {
            EditMode::Editing(id) => Some(id),
            EditMode::Idle => None,
        }
    }

    pub fn primary_label(&self) -> &'static str {
        if self.is_editing() { UPDATE_LABEL } else { ADD_LABEL }
    }

    /// Cancel button is present only in edit mode
    pub fn shows_cancel(&self) -> bool {
        self.is_editing()
    }

    /// Back to idle with an empty input; filter is untouched
    fn reset_edit(self) -> Self {
        Self {
            edit_mode: EditMode::Idle,
            input: String::new(),
            ..self
        }
    }
}

/// Dispatches user actions into the store
#[derive(Debug, Clone)]
pub struct ViewController<S, G> {
    store: TodoStore<S, G>,
}

impl<S: KeyValueStorage, G: IdGenerator> ViewController<S, G> {
    pub fn new(store: TodoStore<S, G>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TodoStore<S, G> {
        &self.store
    }

    /// Fresh list projection from the store's current contents
    pub fn render(&self, state: &UiState) -> RenderedList {
        render(&self.store.list(), state)
    }

    pub fn on_input(&self, state: UiState, text: &str) -> UiState {
        UiState { input: text.to_string(), ..state }
    }

    /// Primary action: add while idle, update while editing.
    ///
    /// Blank text fails with `EmptyInput`; the caller keeps its state.
    pub fn on_submit(&self, state: UiState, text: &str) -> TodoResult<UiState> {
        let Some(id) = state.editing_id().cloned() else {
            self.store.add(text)?;
            return Ok(UiState { input: String::new(), ..state });
        };
        if text.trim().is_empty() {
            return Err(TodoError::EmptyInput);
        }
        if self.store.contains(&id) {
            self.store.update(&id, text)?;
        } else {
            log::debug!("Edit target {} vanished, cancelling edit", id);
        }
        Ok(state.reset_edit())
    }

    /// Enter edit mode for `id` and load its text into the input.
    /// Unknown ids leave the state as it was.
    pub fn on_start_edit(&self, state: UiState, id: &TodoId) -> UiState {
        match self.store.get(id) {
            Some(todo) => UiState {
                edit_mode: EditMode::Editing(todo.id),
                input: todo.text,
                ..state
            },
            None => {
                log::debug!("Start edit: no todo {}", id);
                state
            }
        }
    }

    pub fn on_cancel_edit(&self, state: UiState) -> UiState {
        state.reset_edit()
    }

    /// Delete; deleting the edit target also leaves edit mode
    pub fn on_delete(&self, state: UiState, id: &TodoId) -> UiState {
        self.store.remove(id);
        if state.editing_id() == Some(id) {
            state.reset_edit()
        } else {
            state
        }
    }

    pub fn on_complete(&self, state: UiState, id: &TodoId) -> UiState {
        self.store.set_completed(id);
        state
    }

    pub fn on_filter_change(&self, state: UiState, filter: Filter) -> UiState {
        UiState { filter, ..state }
    }
}
