//! Core task collection engine for the study planner.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod controller;
pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod provider;
pub mod query;
pub mod repo;
pub mod service;

pub use config::AppConfig;
pub use controller::view_state::ViewState;
pub use kv::{KeyValueStore, KvError, KvResult, MemoryKvStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{IsoDate, Task, TaskDraft, TaskFields, TaskId, TaskValidationError};
pub use provider::clock::{Clock, ManualClock, SystemClock};
pub use provider::ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use query::{
    compute_overdue, derive_view, filter_by_status, search_by_text, sort_tasks, summarize,
    ParseParamError, SortMode, StatusFilter, Summary, TaskRow, TaskView, ViewParams,
};
pub use repo::task_repo::{
    KvTaskRepository, RepoError, RepoResult, TaskRepository, TASKS_STORAGE_KEY,
};
pub use service::task_store::{
    Mutation, StoreError, StoreEvent, StoreResult, TaskStore, WriteStatus,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
