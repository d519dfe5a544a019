//! Row-mapping tests for the diesel task adapter.
//!
//! These exercise the pure conversion functions; queries themselves run only
//! against a live database.

use crate::task::{
    adapters::postgres::{TaskRow, row_to_task, task_to_new_row},
    domain::{OwnerId, Priority, Task, TaskDraft, TaskStatus},
    ports::TaskStoreError,
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::rstest;

fn sample_row() -> TaskRow {
    let created = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    TaskRow {
        id: uuid::Uuid::new_v4(),
        owner_id: uuid::Uuid::new_v4(),
        title: Some("Groceries".to_owned()),
        content: "Buy groceries".to_owned(),
        summary: None,
        due_date: Some(created),
        priority: "high".to_owned(),
        status: "pending".to_owned(),
        category: Some("shopping".to_owned()),
        is_flagged: true,
        created_at: created,
        updated_at: created,
    }
}

#[rstest]
fn row_to_task_maps_every_field() {
    let row = sample_row();
    let task = row_to_task(row.clone()).expect("valid row maps");

    assert_eq!(task.id().into_inner(), row.id);
    assert_eq!(task.owner_id().into_inner(), row.owner_id);
    assert_eq!(task.title(), Some("Groceries"));
    assert_eq!(task.content(), "Buy groceries");
    assert_eq!(task.due_date(), row.due_date);
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.category(), Some("shopping"));
    assert!(task.is_flagged());
    assert_eq!(task.created_at(), row.created_at);
}

#[rstest]
#[case("urgent", "pending")]
#[case("high", "archived")]
fn row_to_task_rejects_unknown_enums(#[case] priority: &str, #[case] status: &str) {
    let mut row = sample_row();
    row.priority = priority.to_owned();
    row.status = status.to_owned();

    let result = row_to_task(row);
    assert!(matches!(result, Err(TaskStoreError::Persistence(_))));
}

#[rstest]
fn task_round_trips_through_row_models() {
    let draft = TaskDraft::new("Submit report")
        .with_title("Report")
        .with_priority(Priority::Low)
        .with_category("work");
    let task = Task::new(OwnerId::new(), draft, &DefaultClock).expect("valid draft");

    let row = task_to_new_row(&task);
    let restored = row_to_task(TaskRow {
        id: row.id,
        owner_id: row.owner_id,
        title: row.title.clone(),
        content: row.content.clone(),
        summary: row.summary.clone(),
        due_date: row.due_date,
        priority: row.priority.clone(),
        status: row.status.clone(),
        category: row.category.clone(),
        is_flagged: row.is_flagged,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
    .expect("round trip maps");

    assert_eq!(restored, task);
}
