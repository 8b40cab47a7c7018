//! Task domain model.
//!
//! # Responsibility
//! - Define the `Task` record shared by store, persistence and query layers.
//! - Normalize raw form input (`TaskDraft`) into validated task fields.
//!
//! # Invariants
//! - `id` and `created_at` never change after construction.
//! - `IsoDate` ordering is lexical on the zero-padded `YYYY-MM-DD` text,
//!   which matches chronological order.
//! - Deserialization re-validates every invariant.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque task identifier.
///
/// Kept as plain text so ids minted by older clients still load.
pub type TaskId = String;

/// Validation failures for task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyTitle,
    InvalidDate(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id cannot be empty"),
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Calendar date without time, stored as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoDate(String);

impl IsoDate {
    /// Parses a `YYYY-MM-DD` string, rejecting other widths and impossible dates.
    pub fn parse(raw: &str) -> Result<Self, TaskValidationError> {
        let trimmed = raw.trim();
        if !ISO_DATE_RE.is_match(trimmed)
            || NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).is_err()
        {
            return Err(TaskValidationError::InvalidDate(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(ISO_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, ISO_DATE_FORMAT).ok()
    }
}

impl Display for IsoDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for IsoDate {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IsoDate> for String {
    fn from(value: IsoDate) -> Self {
        value.0
    }
}

/// Raw, unvalidated form input for creating or editing a task.
///
/// An empty `due` means "no due date".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub due: String,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            due: due.into(),
        }
    }

    /// Copies the editable fields of an existing task into a draft.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            subject: task.subject.clone(),
            due: task
                .due
                .as_ref()
                .map(|due| due.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Trims text fields and validates them into storable task fields.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title trims to empty.
    /// - `InvalidDate` when `due` is non-empty but not a valid date.
    pub fn normalize(&self) -> Result<TaskFields, TaskValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        let due = match self.due.trim() {
            "" => None,
            raw => Some(IsoDate::parse(raw)?),
        };

        Ok(TaskFields {
            title: title.to_string(),
            subject: self.subject.trim().to_string(),
            due,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Validated, mutable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub subject: String,
    pub due: Option<IsoDate>,
}

/// One unit of study work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    /// Stable id assigned at creation.
    pub id: TaskId,
    pub title: String,
    /// Free-text category; empty when unset.
    pub subject: String,
    pub due: Option<IsoDate>,
    pub done: bool,
    /// Unix epoch milliseconds, used as ordering tie-break.
    pub created_at: i64,
}

impl Task {
    /// Creates a pending task from validated fields.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `EmptyTitle` when `fields.title` is blank.
    pub fn with_id(
        id: impl Into<TaskId>,
        fields: TaskFields,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: id.into(),
            title: fields.title,
            subject: fields.subject,
            due: fields.due,
            done: false,
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    /// Replaces title, subject and due date; id, done and created_at are kept.
    pub fn apply(&mut self, fields: TaskFields) {
        self.title = fields.title;
        self.subject = fields.subject;
        self.due = fields.due;
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Persisted wire shape of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: String,
    title: String,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    due: Option<String>,
    done: bool,
    created_at: i64,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let due = match record.due.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(IsoDate::parse(raw)?),
        };
        let task = Self {
            id: record.id,
            title: record.title,
            subject: record.subject.unwrap_or_default(),
            due,
            done: record.done,
            created_at: record.created_at,
        };
        task.validate()?;
        Ok(task)
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            subject: Some(task.subject),
            due: Some(task.due.map(String::from).unwrap_or_default()),
            done: task.done,
            created_at: task.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IsoDate, TaskDraft, TaskValidationError};

    #[test]
    fn iso_date_rejects_wrong_width_and_impossible_dates() {
        assert!(IsoDate::parse("2024-01-05").is_ok());
        assert!(IsoDate::parse("2024-1-5").is_err());
        assert!(IsoDate::parse("2024-02-30").is_err());
        assert!(IsoDate::parse("20240105").is_err());
    }

    #[test]
    fn iso_date_orders_chronologically() {
        let early = IsoDate::parse("2023-12-31").unwrap();
        let late = IsoDate::parse("2024-01-01").unwrap();
        assert!(early < late);
    }

    #[test]
    fn draft_normalize_trims_and_maps_empty_due_to_none() {
        let fields = TaskDraft::new("  Read Ch.1 ", " Biology ", "  ")
            .normalize()
            .unwrap();
        assert_eq!(fields.title, "Read Ch.1");
        assert_eq!(fields.subject, "Biology");
        assert_eq!(fields.due, None);
    }

    #[test]
    fn draft_normalize_rejects_blank_title() {
        let err = TaskDraft::new("   ", "Math", "").normalize().unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyTitle);
    }
}
