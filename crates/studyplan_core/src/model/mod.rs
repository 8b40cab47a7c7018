//! Domain model for the study task collection.
//!
//! # Responsibility
//! - Define the canonical `Task` record and its persisted wire shape.
//! - Validate field invariants at the model boundary.
//!
//! # Invariants
//! - Every task is identified by a stable, non-empty `TaskId`.
//! - `title` is never empty or whitespace-only.
//! - `due`, when present, is a fixed-width `YYYY-MM-DD` calendar date.

pub mod task;
