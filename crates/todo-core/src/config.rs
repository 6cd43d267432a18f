//! Store Configuration

use serde::Deserialize;

/// Storage slot used when nothing else is configured
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Configuration for the todo store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Key of the slot holding the JSON-encoded collection
    pub storage_key: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
