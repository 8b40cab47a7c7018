use std::collections::HashSet;
use studyplan_core::{
    compute_overdue, derive_view, filter_by_status, search_by_text, sort_tasks, summarize,
    IsoDate, SortMode, StatusFilter, Task, TaskDraft, ViewParams,
};

fn task(id: &str, title: &str, subject: &str, due: &str, done: bool, created_at: i64) -> Task {
    let fields = TaskDraft::new(title, subject, due).normalize().unwrap();
    let mut task = Task::with_id(id, fields, created_at).unwrap();
    task.done = done;
    task
}

fn sample() -> Vec<Task> {
    vec![
        task("exam", "Exam", "Biology", "2024-01-20", false, 10),
        task("quiz", "Biology quiz", "", "2024-01-05", true, 20),
        task("essay", "Essay", "History", "", false, 30),
        task("lab", "Lab report", "Chemistry", "", true, 40),
        task("read", "Read Ch.1", "Literature", "2023-12-31", false, 50),
    ]
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.clone()).collect()
}

fn today(value: &str) -> IsoDate {
    IsoDate::parse(value).unwrap()
}

#[test]
fn pending_and_done_partition_the_collection() {
    let tasks = sample();
    let pending: HashSet<_> = ids(&filter_by_status(&tasks, StatusFilter::Pending))
        .into_iter()
        .collect();
    let done: HashSet<_> = ids(&filter_by_status(&tasks, StatusFilter::Done))
        .into_iter()
        .collect();

    assert!(pending.is_disjoint(&done));
    assert_eq!(pending.len() + done.len(), tasks.len());
    assert_eq!(
        ids(&filter_by_status(&tasks, StatusFilter::All)),
        ids(&tasks.iter().collect::<Vec<_>>())
    );
}

#[test]
fn search_matches_title_or_subject_case_insensitively() {
    let tasks = sample();
    let hits = search_by_text(&tasks, "bio");
    assert_eq!(ids(&hits), vec!["exam", "quiz"]);

    let hits = search_by_text(&tasks, "ESSAY");
    assert_eq!(ids(&hits), vec!["essay"]);
}

#[test]
fn search_excludes_tasks_without_match_and_ignores_due_text() {
    let tasks = sample();
    assert!(search_by_text(&tasks, "physics").is_empty());
    assert!(search_by_text(&tasks, "2024-01").is_empty());
}

#[test]
fn blank_search_is_identity() {
    let tasks = sample();
    assert_eq!(search_by_text(&tasks, "").len(), tasks.len());
    assert_eq!(search_by_text(&tasks, "   ").len(), tasks.len());
}

#[test]
fn search_is_idempotent() {
    let tasks = sample();
    for query in ["bio", "e", "", "zzz"] {
        let once = search_by_text(&tasks, query);
        let twice = search_by_text(once.clone(), query);
        assert_eq!(ids(&once), ids(&twice), "query `{query}`");
    }
}

#[test]
fn sort_by_due_orders_dated_ascending_then_undated_newest_first() {
    let tasks = sample();
    let sorted = sort_tasks(tasks.iter().collect(), SortMode::Due);
    assert_eq!(ids(&sorted), vec!["read", "quiz", "exam", "lab", "essay"]);
}

#[test]
fn sort_by_due_orders_two_dated_tasks_chronologically() {
    let late = task("late", "Late", "", "2024-01-20", false, 1);
    let early = task("early", "Early", "", "2024-01-05", false, 2);
    let sorted = sort_tasks(vec![&late, &early], SortMode::Due);
    let dues: Vec<_> = sorted
        .iter()
        .map(|task| task.due.as_ref().unwrap().as_str())
        .collect();
    assert_eq!(dues, vec!["2024-01-05", "2024-01-20"]);
}

#[test]
fn sort_by_created_at_both_directions() {
    let tasks = sample();
    let newest = sort_tasks(tasks.iter().collect(), SortMode::Newest);
    assert_eq!(ids(&newest), vec!["read", "lab", "essay", "quiz", "exam"]);

    let oldest = sort_tasks(tasks.iter().collect(), SortMode::Oldest);
    assert_eq!(ids(&oldest), vec!["exam", "quiz", "essay", "lab", "read"]);
}

#[test]
fn sort_is_a_permutation_for_every_mode() {
    let tasks = sample();
    let expected: HashSet<_> = tasks.iter().map(|task| task.id.clone()).collect();
    for mode in [SortMode::Due, SortMode::Newest, SortMode::Oldest] {
        let sorted = sort_tasks(tasks.iter().collect(), mode);
        assert_eq!(sorted.len(), tasks.len());
        let actual: HashSet<_> = sorted.iter().map(|task| task.id.clone()).collect();
        assert_eq!(actual, expected, "mode {mode}");
    }
}

#[test]
fn overdue_requires_past_due_date_and_pending_status() {
    let mut old = task("old", "Old", "", "2023-01-01", false, 1);
    assert!(compute_overdue(&old, &today("2024-01-01")));

    old.done = true;
    assert!(!compute_overdue(&old, &today("2024-01-01")));

    let due_today = task("today", "Today", "", "2024-01-01", false, 1);
    assert!(!compute_overdue(&due_today, &today("2024-01-01")));

    let undated = task("undated", "Undated", "", "", false, 1);
    assert!(!compute_overdue(&undated, &today("2024-01-01")));
}

#[test]
fn summary_counts_cover_whole_collection() {
    let tasks = sample();
    let summary = summarize(&tasks);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.pending, 3);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.total, summary.pending + summary.completed);

    let empty = summarize(&Vec::<Task>::new());
    assert_eq!(empty.total, 0);
}

#[test]
fn derive_view_composes_filter_search_sort_and_keeps_full_summary() {
    let tasks = sample();
    let params = ViewParams {
        filter: StatusFilter::Pending,
        query: "e".to_string(),
        sort: SortMode::Due,
    };

    let view = derive_view(&tasks, &params, &today("2024-01-10"));
    let row_ids: Vec<_> = view.rows.iter().map(|row| row.task.id.as_str()).collect();
    assert_eq!(row_ids, vec!["read", "exam", "essay"]);

    let overdue: Vec<_> = view.rows.iter().map(|row| row.overdue).collect();
    assert_eq!(overdue, vec![true, false, false]);

    assert_eq!(view.summary.total, 5);
    assert_eq!(view.summary.completed, 2);
    assert!(!view.is_empty());
}

#[test]
fn derive_view_reports_empty_when_nothing_matches() {
    let tasks = sample();
    let params = ViewParams {
        query: "nothing matches".to_string(),
        ..ViewParams::default()
    };
    let view = derive_view(&tasks, &params, &today("2024-01-10"));
    assert!(view.is_empty());
    assert_eq!(view.summary.total, 5);
}
