//! Task store: the single owner of the in-memory task collection.
//!
//! # Responsibility
//! - Apply create/update/toggle/remove mutations to the collection.
//! - Flush the full collection through the repository after every mutation.
//! - Notify subscribers after each successful mutation.
//!
//! # Invariants
//! - Task ids are unique within the collection.
//! - Rejected mutations (validation, unknown id) leave the collection and
//!   the persisted payload untouched.
//! - A failed write never rolls back the in-memory change; it is reported
//!   through `WriteStatus::Failed`.

use crate::model::task::{Task, TaskDraft, TaskId, TaskValidationError};
use crate::provider::clock::{Clock, SystemClock};
use crate::provider::ids::{IdGenerator, UuidIdGenerator};
use crate::repo::task_repo::{RepoError, TaskRepository};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejected task store operation. The collection is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Outcome of the persistence write that follows a mutation.
#[derive(Debug)]
pub enum WriteStatus {
    Persisted,
    /// The write failed; the in-memory collection stays authoritative.
    Failed(RepoError),
}

/// Result of an applied mutation together with its write status.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub write: WriteStatus,
}

impl<T> Mutation<T> {
    pub fn is_persisted(&self) -> bool {
        matches!(self.write, WriteStatus::Persisted)
    }

    pub fn write_error(&self) -> Option<&RepoError> {
        match &self.write {
            WriteStatus::Persisted => None,
            WriteStatus::Failed(err) => Some(err),
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { id: TaskId },
    Updated { id: TaskId },
    Toggled { id: TaskId, done: bool },
    Removed { id: TaskId },
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Owner of the canonical task collection.
pub struct TaskStore<R, C = SystemClock, G = UuidIdGenerator> {
    repo: R,
    clock: C,
    ids: G,
    tasks: Vec<Task>,
    listeners: Vec<Listener>,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Loads the collection using the system clock and UUID ids.
    pub fn open(repo: R) -> Self {
        Self::with_providers(repo, SystemClock, UuidIdGenerator)
    }
}

impl<R, C, G> TaskStore<R, C, G>
where
    R: TaskRepository,
    C: Clock,
    G: IdGenerator,
{
    /// Loads the collection once; unreadable data starts an empty collection.
    pub fn with_providers(repo: R, clock: C, ids: G) -> Self {
        let tasks = repo.load();
        info!(
            "event=store_open module=store status=ok count={}",
            tasks.len()
        );
        Self {
            repo,
            clock,
            ids,
            tasks,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback invoked after every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read-only snapshot of the collection in internal order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Creates a pending task at the front of the collection.
    ///
    /// # Errors
    /// - `Validation` when the title trims to empty or `due` is malformed.
    pub fn add(&mut self, draft: &TaskDraft) -> StoreResult<Mutation<Task>> {
        let fields = draft.normalize()?;
        let id = self.next_unique_id();
        let task = Task::with_id(id, fields, self.clock.now_epoch_ms())?;

        self.tasks.insert(0, task.clone());
        let write = self.flush("task_add", &task.id);
        self.notify(StoreEvent::Added {
            id: task.id.clone(),
        });
        Ok(Mutation { value: task, write })
    }

    /// Replaces title, subject and due date of an existing task.
    ///
    /// # Errors
    /// - `Validation` when the draft is invalid (checked before lookup).
    /// - `NotFound` when no task has `id`.
    pub fn update(&mut self, id: &str, draft: &TaskDraft) -> StoreResult<Mutation<Task>> {
        let fields = draft.normalize()?;
        let index = self.index_of(id)?;

        self.tasks[index].apply(fields);
        let task = self.tasks[index].clone();
        let write = self.flush("task_update", &task.id);
        self.notify(StoreEvent::Updated {
            id: task.id.clone(),
        });
        Ok(Mutation { value: task, write })
    }

    /// Flips the completion flag of an existing task.
    pub fn toggle_done(&mut self, id: &str) -> StoreResult<Mutation<Task>> {
        let index = self.index_of(id)?;

        self.tasks[index].done = !self.tasks[index].done;
        let task = self.tasks[index].clone();
        let write = self.flush("task_toggle", &task.id);
        self.notify(StoreEvent::Toggled {
            id: task.id.clone(),
            done: task.done,
        });
        Ok(Mutation { value: task, write })
    }

    /// Removes a task and returns it.
    pub fn remove(&mut self, id: &str) -> StoreResult<Mutation<Task>> {
        let index = self.index_of(id)?;

        let task = self.tasks.remove(index);
        let write = self.flush("task_remove", &task.id);
        self.notify(StoreEvent::Removed {
            id: task.id.clone(),
        });
        Ok(Mutation { value: task, write })
    }

    fn index_of(&self, id: &str) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    // Generators are not trusted to be collision-free against loaded data.
    fn next_unique_id(&mut self) -> TaskId {
        loop {
            let id = self.ids.next_id();
            if !id.trim().is_empty() && self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn flush(&mut self, event: &str, task_id: &str) -> WriteStatus {
        match self.repo.save(&self.tasks) {
            Ok(()) => {
                info!(
                    "event={event} module=store status=ok task_id={task_id} count={}",
                    self.tasks.len()
                );
                WriteStatus::Persisted
            }
            Err(err) => {
                error!(
                    "event={event} module=store status=error error_code=persist_failed task_id={task_id} error={err}"
                );
                WriteStatus::Failed(err)
            }
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
