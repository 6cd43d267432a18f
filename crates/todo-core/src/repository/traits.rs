//! Repository Layer - Storage Slot Trait
//!
//! A synchronous key/value slot holding strings. The browser's
//! `localStorage` is the production backend; tests use memory.

/// Key/value storage slot
pub trait KeyValueStorage {
    /// Read the raw value, `None` when the slot is empty or unavailable
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the raw value
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).write(key, value)
    }
}
