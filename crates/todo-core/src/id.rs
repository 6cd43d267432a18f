//! Id Generation
//!
//! Fresh ids combine a millisecond timestamp with random bits, so they
//! don't collide within a session or with previously stored ids.

use ulid::Ulid;
use crate::domain::TodoId;

/// Source of fresh todo ids
pub trait IdGenerator {
    fn next_id(&self) -> TodoId;
}

/// ULID-based ids: 48-bit timestamp + 80 random bits
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn next_id(&self) -> TodoId {
        TodoId::new(Ulid::new().to_string())
    }
}
