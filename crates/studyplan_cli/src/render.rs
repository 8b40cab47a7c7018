//! Plain-text rendering of task views.

use studyplan_core::{Summary, Task, TaskView};

const NO_SUBJECT: &str = "No subject";
const NO_DUE_DATE: &str = "No due date";
const EMPTY_STATE: &str = "No tasks to show.";

/// One line per task: status box, title, subject, due date and id.
pub fn render_task_line(task: &Task, overdue: bool) -> String {
    let status = if task.done { "[x]" } else { "[ ]" };
    let subject = if task.subject.is_empty() {
        NO_SUBJECT
    } else {
        task.subject.as_str()
    };
    let due = task
        .due
        .as_ref()
        .map(|due| format!("Due {due}"))
        .unwrap_or_else(|| NO_DUE_DATE.to_string());
    let marker = if overdue { " OVERDUE" } else { "" };

    format!(
        "{status} {} | {subject} | {due}{marker} ({})",
        task.title, task.id
    )
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Total: {} | Pending: {} | Completed: {}",
        summary.total, summary.pending, summary.completed
    )
}

pub fn render_view(view: &TaskView<'_>) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
    }
    for row in &view.rows {
        out.push_str(&render_task_line(row.task, row.overdue));
        out.push('\n');
    }
    out.push_str(&render_summary(&view.summary));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::{render_task_line, render_view};
    use studyplan_core::{derive_view, IsoDate, Task, TaskDraft, ViewParams};

    fn task(id: &str, title: &str, subject: &str, due: &str) -> Task {
        let fields = TaskDraft::new(title, subject, due).normalize().unwrap();
        Task::with_id(id, fields, 1).unwrap()
    }

    #[test]
    fn task_line_uses_placeholders_and_overdue_marker() {
        let line = render_task_line(&task("a", "Essay", "", ""), false);
        assert_eq!(line, "[ ] Essay | No subject | No due date (a)");

        let line = render_task_line(&task("b", "Exam", "Biology", "2023-01-01"), true);
        assert_eq!(line, "[ ] Exam | Biology | Due 2023-01-01 OVERDUE (b)");
    }

    #[test]
    fn empty_view_prints_empty_state_and_summary() {
        let tasks: Vec<Task> = Vec::new();
        let today = IsoDate::parse("2024-01-01").unwrap();
        let out = render_view(&derive_view(&tasks, &ViewParams::default(), &today));
        assert_eq!(
            out,
            "No tasks to show.\nTotal: 0 | Pending: 0 | Completed: 0\n"
        );
    }
}
