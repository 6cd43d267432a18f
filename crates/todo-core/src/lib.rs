//! Todo Core
//!
//! DOM-free logic for the todo list: the storage-backed item store,
//! status filters, the edit-mode controller and the render projection.

pub mod config;
pub mod controller;
pub mod domain;
pub mod filter;
pub mod id;
pub mod render;
pub mod repository;

mod tests;

pub use config::TodoConfig;
pub use controller::{EditMode, UiState, ViewController};
pub use domain::{Entity, Filter, TodoError, TodoId, TodoItem, TodoResult};
pub use filter::filter_todos;
pub use id::{IdGenerator, UlidGenerator};
pub use render::{render, RenderedList, RowView};
pub use repository::{KeyValueStorage, MemoryStorage, TodoStore};
