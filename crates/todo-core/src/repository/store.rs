//! Todo Store
//!
//! CRUD over the single persisted collection. Every operation reads the
//! whole slot, modifies it and writes it back, so no stale copy is ever
//! held between calls.

use crate::config::TodoConfig;
use crate::domain::{Entity, TodoError, TodoId, TodoItem, TodoResult};
use crate::id::IdGenerator;
use super::traits::KeyValueStorage;

/// Storage-backed todo collection, newest first
#[derive(Debug, Clone)]
pub struct TodoStore<S, G> {
    storage: S,
    ids: G,
    key: String,
}

impl<S: KeyValueStorage, G: IdGenerator> TodoStore<S, G> {
    pub fn new(storage: S, ids: G, config: &TodoConfig) -> Self {
        Self {
            storage,
            ids,
            key: config.storage_key.clone(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current collection. Missing or malformed data reads as empty.
    pub fn list(&self) -> Vec<TodoItem> {
        let Some(raw) = self.storage.read(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(todos) => todos,
            Err(e) => {
                log::warn!("Ignoring unreadable '{}' slot: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Find one item by id
    pub fn get(&self, id: &TodoId) -> Option<TodoItem> {
        self.list().into_iter().find(|todo| todo.id() == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.list().iter().any(|todo| todo.id() == id)
    }

    /// Create a pending item from trimmed text and put it first
    pub fn add(&self, text: &str) -> TodoResult<TodoItem> {
        let text = non_empty(text)?;
        let mut todos = self.list();

        let mut id = self.ids.next_id();
        while todos.iter().any(|todo| todo.id == id) {
            id = self.ids.next_id();
        }

        let todo = TodoItem::new(id, text);
        log::debug!("Adding todo {}", todo.id);
        todos.insert(0, todo.clone());
        self.save(&todos);
        Ok(todo)
    }

    /// Remove by id; absent ids are ignored
    pub fn remove(&self, id: &TodoId) {
        let mut todos = self.list();
        let before = todos.len();
        todos.retain(|todo| todo.id() != id);
        if todos.len() == before {
            log::debug!("Remove: no todo {}", id);
        } else {
            log::debug!("Removed todo {}", id);
        }
        self.save(&todos);
    }

    /// Replace the text of an item; absent ids are ignored
    pub fn update(&self, id: &TodoId, text: &str) -> TodoResult<()> {
        let text = non_empty(text)?;
        let mut todos = self.list();
        match todos.iter_mut().find(|todo| todo.id() == id) {
            Some(todo) => {
                todo.text = text.to_string();
                log::debug!("Updated todo {}", id);
                self.save(&todos);
            }
            None => log::debug!("Update: no todo {}", id),
        }
        Ok(())
    }

    /// Mark an item completed; absent ids are ignored
    pub fn set_completed(&self, id: &TodoId) {
        let mut todos = self.list();
        match todos.iter_mut().find(|todo| todo.id() == id) {
            Some(todo) => {
                todo.complete();
                log::debug!("Completed todo {}", id);
                self.save(&todos);
            }
            None => log::debug!("Complete: no todo {}", id),
        }
    }

    fn save(&self, todos: &[TodoItem]) {
        let json = match serde_json::to_string(todos) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize todos: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(&self.key, &json) {
            log::error!("Failed to save todos to '{}': {}", self.key, e);
        }
    }
}

/// Trim and reject blank text
fn non_empty(text: &str) -> TodoResult<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyInput);
    }
    Ok(text)
}
