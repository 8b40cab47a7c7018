use studyplan_core::{IsoDate, Task, TaskDraft, TaskValidationError};

#[test]
fn with_id_sets_pending_defaults() {
    let fields = TaskDraft::new("Read Ch.1", "Biology", "2024-01-10")
        .normalize()
        .unwrap();
    let task = Task::with_id("task-1", fields, 1_700_000_000_000).unwrap();

    assert_eq!(task.id, "task-1");
    assert_eq!(task.title, "Read Ch.1");
    assert_eq!(task.subject, "Biology");
    assert_eq!(task.due.as_ref().map(IsoDate::as_str), Some("2024-01-10"));
    assert!(!task.done);
    assert_eq!(task.created_at, 1_700_000_000_000);
}

#[test]
fn with_id_rejects_blank_id() {
    let fields = TaskDraft::new("title", "", "").normalize().unwrap();
    let err = Task::with_id("  ", fields, 0).unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyId);
}

#[test]
fn draft_rejects_malformed_due_date() {
    let err = TaskDraft::new("title", "", "10/01/2024")
        .normalize()
        .unwrap_err();
    assert_eq!(
        err,
        TaskValidationError::InvalidDate("10/01/2024".to_string())
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let fields = TaskDraft::new("Exam", "Biology", "2024-01-20")
        .normalize()
        .unwrap();
    let mut task = Task::with_id("abc", fields, 42).unwrap();
    task.done = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "abc");
    assert_eq!(json["title"], "Exam");
    assert_eq!(json["subject"], "Biology");
    assert_eq!(json["due"], "2024-01-20");
    assert_eq!(json["done"], true);
    assert_eq!(json["createdAt"], 42);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn missing_due_serializes_as_empty_string_and_reads_back_as_none() {
    let fields = TaskDraft::new("Essay", "", "").normalize().unwrap();
    let task = Task::with_id("no-due", fields, 1).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["due"], "");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.due, None);
}

#[test]
fn deserialize_tolerates_absent_optional_fields() {
    let value = serde_json::json!({
        "id": "legacy-17000000001a2b",
        "title": "Old task",
        "done": false,
        "createdAt": 1_700_000_000_000_i64
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.subject, "");
    assert_eq!(task.due, None);
}

#[test]
fn deserialize_rejects_invalid_records() {
    let blank_title = serde_json::json!({
        "id": "a", "title": "  ", "subject": "", "due": "", "done": false, "createdAt": 1
    });
    let err = serde_json::from_value::<Task>(blank_title).unwrap_err();
    assert!(err.to_string().contains("title cannot be empty"), "unexpected error: {err}");

    let bad_due = serde_json::json!({
        "id": "a", "title": "t", "subject": "", "due": "2024-13-01", "done": false, "createdAt": 1
    });
    let err = serde_json::from_value::<Task>(bad_due).unwrap_err();
    assert!(err.to_string().contains("2024-13-01"), "unexpected error: {err}");

    let wrong_type = serde_json::json!({
        "id": "a", "title": "t", "subject": "", "due": "", "done": "no", "createdAt": 1
    });
    assert!(serde_json::from_value::<Task>(wrong_type).is_err());
}
