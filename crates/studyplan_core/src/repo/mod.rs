//! Persistence adapter between the task store and key-value storage.
//!
//! # Responsibility
//! - Serialize the whole task collection under one storage key.
//! - Keep storage transport details out of the task store.
//!
//! # Invariants
//! - Reads are fail-open: a missing or unreadable payload yields an empty
//!   collection, never an error to the store.
//! - Writes replace the full collection in a single `set`.

pub mod task_repo;
