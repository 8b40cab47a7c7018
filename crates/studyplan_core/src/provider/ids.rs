//! Task id generators.

use crate::model::task::TaskId;
use uuid::Uuid;

/// Mints ids that are unique for the lifetime of a collection.
pub trait IdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        Uuid::new_v4().to_string()
    }
}

/// Predictable `prefix-N` ids for tests.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
