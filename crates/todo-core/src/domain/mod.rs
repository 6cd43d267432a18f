//! Domain Layer
//!
//! Todo entities and the errors raised against them.
//! Nothing here touches storage or the browser.

mod entity;
mod filter;
mod todo;

pub use entity::{Entity, TodoError, TodoResult};
pub use filter::Filter;
pub use todo::{TodoId, TodoItem};
