//! SQLite-backed key-value store.
//!
//! # Invariants
//! - Connections are migrated before the store accepts them.
//! - `set` is a single UPSERT statement, so a value is never half-written.

use super::{KeyValueStore, KvError, KvResult};
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Key-value store persisted in the `kv_entries` table.
#[derive(Debug)]
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Opens (or creates) a database file and applies migrations.
    pub fn open(path: impl AsRef<Path>) -> KvResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a migrated in-memory database.
    pub fn open_in_memory() -> KvResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already-open connection.
    ///
    /// # Errors
    /// - `MissingSchema` when the connection was not migrated.
    pub fn try_new(conn: Connection) -> KvResult<Self> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(KvError::MissingSchema);
        }
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
