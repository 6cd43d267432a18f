//! Domain Layer - Core Entity Trait
//!
//! Basic contract for persisted entities plus the domain error type.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Domain-level errors
///
/// Only blank input is user-facing. Missing ids and unreadable storage
/// are handled as silent no-ops and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Please Add Text!")]
    EmptyInput,
}
