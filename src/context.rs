//! Application Context
//!
//! Shared UI state and the controller, provided via Leptos Context API.
//! Components dispatch actions here; nothing reads state back from the DOM.

use leptos::prelude::*;
use todo_core::{RenderedList, TodoConfig, TodoStore, UiState, UlidGenerator, ViewController};

use crate::storage::BrowserStorage;

pub type TodoController = ViewController<BrowserStorage, UlidGenerator>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Filter, edit mode and input text - read
    pub ui: ReadSignal<UiState>,
    /// Filter, edit mode and input text - write
    set_ui: WriteSignal<UiState>,
    /// Bumped after every store mutation - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every store mutation - write
    set_reload_trigger: WriteSignal<u32>,
    controller: StoredValue<TodoController>,
}

impl AppContext {
    pub fn new(
        ui: (ReadSignal<UiState>, WriteSignal<UiState>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: &TodoConfig,
    ) -> Self {
        let store = TodoStore::new(BrowserStorage, UlidGenerator, config);
        Self {
            ui: ui.0,
            set_ui: ui.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            controller: StoredValue::new(ViewController::new(store)),
        }
    }

    /// Trigger a re-render from storage
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Run a handler on the current state, keep the state it returns,
    /// then re-render
    pub fn dispatch(&self, action: impl FnOnce(&TodoController, UiState) -> UiState) {
        let state = self.ui.get_untracked();
        let next = self.controller.with_value(|ctl| action(ctl, state));
        self.set_ui.set(next);
        self.reload();
    }

    /// Keystrokes only touch UI state
    pub fn set_input(&self, text: String) {
        let state = self.ui.get_untracked();
        let next = self.controller.with_value(|ctl| ctl.on_input(state, &text));
        self.set_ui.set(next);
    }

    /// Primary action with the current input text
    pub fn submit(&self) {
        let state = self.ui.get_untracked();
        let text = state.input.clone();
        match self.controller.with_value(|ctl| ctl.on_submit(state, &text)) {
            Ok(next) => {
                self.set_ui.set(next);
                self.reload();
            }
            Err(e) => {
                log::warn!("Submit rejected: {}", e);
                alert(&e.to_string());
            }
        }
    }

    /// List projection for `state`, re-run on every reload
    pub fn rendered(&self, state: &UiState) -> RenderedList {
        self.reload_trigger.track();
        self.controller.with_value(|ctl| ctl.render(state))
    }
}

/// Blocking notification
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
