//! Repository Layer
//!
//! Storage slot abstraction and the todo store built on top of it.

mod memory;
mod store;
mod traits;

pub use memory::MemoryStorage;
pub use store::TodoStore;
pub use traits::KeyValueStorage;
