//! Durable key-value storage consumed by the persistence adapter.
//!
//! # Responsibility
//! - Define the minimal `get`/`set` contract the task repository relies on.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - `set` replaces the whole value for a key in one step; readers never
//!   observe a partially written value.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type KvResult<T> = Result<T, KvError>;

/// Storage-layer failure for key-value reads and writes.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Write rejected because the store is over its capacity.
    QuotaExceeded { limit_bytes: usize, required_bytes: usize },
    /// Store opened on a connection without the expected schema.
    MissingSchema,
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                limit_bytes,
                required_bytes,
            } => write!(
                f,
                "storage quota exceeded: {required_bytes} bytes required, limit is {limit_bytes}"
            ),
            Self::MissingSchema => write!(f, "kv_entries table is missing; run migrations first"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } | Self::MissingSchema => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value store with whole-value replacement semantics.
pub trait KeyValueStore {
    /// Returns the raw value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> KvResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        (**self).set(key, value)
    }
}
