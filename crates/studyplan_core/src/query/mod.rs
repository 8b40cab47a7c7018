//! Pure derivation pipeline from task collection to display view.
//!
//! # Responsibility
//! - Filter by status, search by text, sort, and summarize.
//! - Compose those stages in a fixed order into a `TaskView`.
//!
//! # Invariants
//! - Every function is side-effect free; equal inputs give equal outputs.
//! - Summary counts always cover the full collection, not the visible subset.

pub mod pipeline;
pub mod params;

pub use params::{ParseParamError, SortMode, StatusFilter, ViewParams};
pub use pipeline::{
    compute_overdue, derive_view, filter_by_status, search_by_text, sort_tasks, summarize,
    Summary, TaskRow, TaskView,
};
