//! Task collection repository over a `KeyValueStore`.
//!
//! # Invariants
//! - The persisted payload is a JSON array of task records.
//! - Loaded collections never contain duplicate ids.

use crate::kv::{KeyValueStore, KvError};
use crate::model::task::Task;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized collection.
pub const TASKS_STORAGE_KEY: &str = "study_planner_tasks_v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure for loading or saving the collection.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying store rejected the read or write.
    Store(KvError),
    /// Stored payload is not a valid task sequence.
    Decode(serde_json::Error),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "task storage failed: {err}"),
            Self::Decode(err) => write!(f, "invalid persisted task data: {err}"),
            Self::Encode(err) => write!(f, "failed to serialize tasks: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode(err) | Self::Encode(err) => Some(err),
        }
    }
}

impl From<KvError> for RepoError {
    fn from(value: KvError) -> Self {
        Self::Store(value)
    }
}

/// Load/save contract for the whole task collection.
pub trait TaskRepository {
    /// Reads the stored collection, surfacing read and decode failures.
    fn try_load(&self) -> RepoResult<Vec<Task>>;

    /// Writes the full collection.
    fn save(&mut self, tasks: &[Task]) -> RepoResult<()>;

    /// Reads the stored collection, falling back to empty on any failure.
    fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("event=tasks_load module=repo status=fallback error={err}");
                Vec::new()
            }
        }
    }
}

/// Repository storing the collection as JSON under a single key.
#[derive(Debug)]
pub struct KvTaskRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvTaskRepository<S> {
    /// Creates a repository using the default storage key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, TASKS_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> TaskRepository for KvTaskRepository<S> {
    fn try_load(&self) -> RepoResult<Vec<Task>> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!("event=tasks_load module=repo status=ok source=empty count=0");
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let decoded: Vec<Task> = serde_json::from_str(&raw).map_err(RepoError::Decode)?;
        let tasks = dedupe_by_id(decoded);
        info!(
            "event=tasks_load module=repo status=ok source=store count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> RepoResult<()> {
        let payload = serde_json::to_string(tasks).map_err(RepoError::Encode)?;
        self.store.set(&self.key, &payload)?;
        debug!(
            "event=tasks_save module=repo status=ok count={} bytes={}",
            tasks.len(),
            payload.len()
        );
        Ok(())
    }
}

fn dedupe_by_id(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    let total = tasks.len();
    let unique: Vec<Task> = tasks
        .into_iter()
        .filter(|task| seen.insert(task.id.clone()))
        .collect();
    if unique.len() != total {
        warn!(
            "event=tasks_load module=repo status=repaired dropped_duplicates={}",
            total - unique.len()
        );
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::{KvTaskRepository, RepoError, TaskRepository, TASKS_STORAGE_KEY};
    use crate::kv::MemoryKvStore;

    #[test]
    fn try_load_reports_decode_error_but_load_falls_back() {
        let store = MemoryKvStore::new().with_entry(TASKS_STORAGE_KEY, "[1, 2]");
        let repo = KvTaskRepository::new(store);

        assert!(matches!(repo.try_load(), Err(RepoError::Decode(_))));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let payload = r#"[
            {"id":"a","title":"first","subject":"","due":"","done":false,"createdAt":1},
            {"id":"a","title":"second","subject":"","due":"","done":true,"createdAt":2}
        ]"#;
        let repo = KvTaskRepository::new(MemoryKvStore::new().with_entry(TASKS_STORAGE_KEY, payload));

        let tasks = repo.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "first");
    }
}
