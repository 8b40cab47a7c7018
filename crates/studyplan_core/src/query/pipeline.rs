//! Filter, search, sort and summarize stages.
//!
//! Stages borrow tasks and never clone them. Composition order in
//! [`derive_view`] is fixed: status filter, text search, sort.

use super::params::{SortMode, StatusFilter, ViewParams};
use crate::model::task::{IsoDate, Task};
use std::cmp::Ordering;

/// Aggregate counts over a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// One displayable task with derived flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    pub overdue: bool,
}

/// Ordered display list plus whole-collection summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView<'a> {
    pub rows: Vec<TaskRow<'a>>,
    pub summary: Summary,
}

impl TaskView<'_> {
    /// Whether nothing matches the current filter and search.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Keeps tasks matching the completion filter.
pub fn filter_by_status<'a, I>(tasks: I, filter: StatusFilter) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| match filter {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.done,
            StatusFilter::Done => task.done,
        })
        .collect()
}

/// Keeps tasks whose title or subject contains `query`, ignoring case.
///
/// A blank query keeps everything. Due dates are not searched.
pub fn search_by_text<'a, I>(tasks: I, query: &str) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.into_iter().collect();
    }

    tasks
        .into_iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&needle)
                || task.subject.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort by the given mode.
pub fn sort_tasks<'a>(mut tasks: Vec<&'a Task>, mode: SortMode) -> Vec<&'a Task> {
    match mode {
        SortMode::Due => tasks.sort_by(|a, b| compare_by_due(a, b)),
        SortMode::Newest => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    tasks
}

fn compare_by_due(a: &Task, b: &Task) -> Ordering {
    match (&a.due, &b.due) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.created_at.cmp(&a.created_at),
    }
}

/// Whether a pending task's due date is strictly before `today`.
pub fn compute_overdue(task: &Task, today: &IsoDate) -> bool {
    match &task.due {
        Some(due) => !task.done && due < today,
        None => false,
    }
}

/// Counts total, pending and completed tasks.
pub fn summarize<'a, I>(tasks: I) -> Summary
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .fold(Summary::default(), |mut summary, task| {
            summary.total += 1;
            if task.done {
                summary.completed += 1;
            } else {
                summary.pending += 1;
            }
            summary
        })
}

/// Runs the full pipeline for one render.
pub fn derive_view<'a>(tasks: &'a [Task], params: &ViewParams, today: &IsoDate) -> TaskView<'a> {
    let filtered = filter_by_status(tasks, params.filter);
    let searched = search_by_text(filtered, &params.query);
    let sorted = sort_tasks(searched, params.sort);

    TaskView {
        rows: sorted
            .into_iter()
            .map(|task| TaskRow {
                task,
                overdue: compute_overdue(task, today),
            })
            .collect(),
        summary: summarize(tasks),
    }
}
