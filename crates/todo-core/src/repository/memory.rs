//! In-Memory Storage Slot

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::KeyValueStorage;

/// Storage backed by a map, for tests and browsers without `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with a raw value
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
