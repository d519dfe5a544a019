//! Ordering-contract tests for the in-memory task store.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{OwnerId, PersistedTaskData, Priority, Task, TaskDraft, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn pending_task(
    owner_id: OwnerId,
    content: &str,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        owner_id,
        title: None,
        content: content.to_owned(),
        summary: None,
        due_date,
        priority: Priority::Medium,
        status: TaskStatus::Pending,
        category: None,
        is_flagged: false,
        created_at,
        updated_at: created_at,
    })
}

fn contents(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::content).collect()
}

// ============================================================================
// Store and update semantics
// ============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_id(store: Arc<InMemoryTaskStore>) {
    let task = Task::new(OwnerId::new(), TaskDraft::new("Buy milk"), &DefaultClock)
        .expect("valid draft");
    store.store(&task).await.expect("first insert succeeds");

    let result = store.store(&task).await;
    assert!(matches!(result, Err(TaskStoreError::DuplicateTask(id)) if id == task.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_unknown_id(store: Arc<InMemoryTaskStore>) {
    let task = Task::new(OwnerId::new(), TaskDraft::new("Buy milk"), &DefaultClock)
        .expect("valid draft");

    let result = store.update(&task).await;
    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == task.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_stored_task(store: Arc<InMemoryTaskStore>) {
    let mut task = Task::new(OwnerId::new(), TaskDraft::new("Buy milk"), &DefaultClock)
        .expect("valid draft");
    store.store(&task).await.expect("insert succeeds");

    task.complete(&DefaultClock).expect("pending task completes");
    store.update(&task).await.expect("update succeeds");

    let fetched = store
        .find_by_id(task.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(fetched.status(), TaskStatus::Completed);
}

// ============================================================================
// Positional ordering contract
// ============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_pending_orders_by_due_date_with_undated_last(store: Arc<InMemoryTaskStore>) {
    let owner = OwnerId::new();
    let undated = pending_task(owner, "undated", None, at(8));
    let due_late = pending_task(owner, "due later", Some(at(18)), at(9));
    let due_early = pending_task(owner, "due soon", Some(at(12)), at(10));

    for task in [&undated, &due_late, &due_early] {
        store.store(task).await.expect("insert succeeds");
    }

    let listed = store.list_pending(owner, 20).await.expect("listing succeeds");
    assert_eq!(contents(&listed), vec!["due soon", "due later", "undated"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_pending_breaks_due_date_ties_by_creation(store: Arc<InMemoryTaskStore>) {
    let owner = OwnerId::new();
    let due = Some(at(12));
    let second = pending_task(owner, "second", due, at(10));
    let first = pending_task(owner, "first", due, at(9));

    store.store(&second).await.expect("insert succeeds");
    store.store(&first).await.expect("insert succeeds");

    let listed = store.list_pending(owner, 20).await.expect("listing succeeds");
    assert_eq!(contents(&listed), vec!["first", "second"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_pending_orders_undated_tasks_by_creation(store: Arc<InMemoryTaskStore>) {
    let owner = OwnerId::new();
    let later = pending_task(owner, "later", None, at(11));
    let earlier = pending_task(owner, "earlier", None, at(9));

    store.store(&later).await.expect("insert succeeds");
    store.store(&earlier).await.expect("insert succeeds");

    let listed = store.list_pending(owner, 20).await.expect("listing succeeds");
    assert_eq!(contents(&listed), vec!["earlier", "later"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_pending_truncates_to_limit(store: Arc<InMemoryTaskStore>) {
    let owner = OwnerId::new();
    for hour in 1..=5 {
        let task = pending_task(owner, &format!("task {hour}"), None, at(hour));
        store.store(&task).await.expect("insert succeeds");
    }

    let listed = store.list_pending(owner, 3).await.expect("listing succeeds");
    assert_eq!(contents(&listed), vec!["task 1", "task 2", "task 3"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_pending_excludes_other_owners_and_terminal_tasks(store: Arc<InMemoryTaskStore>) {
    let owner = OwnerId::new();
    let other_owner = OwnerId::new();

    let mine = pending_task(owner, "mine", None, at(9));
    let theirs = pending_task(other_owner, "theirs", None, at(9));
    let mut finished = pending_task(owner, "finished", None, at(10));
    finished.complete(&DefaultClock).expect("pending task completes");

    for task in [&mine, &theirs, &finished] {
        store.store(task).await.expect("insert succeeds");
    }

    let listed = store.list_pending(owner, 20).await.expect("listing succeeds");
    assert_eq!(contents(&listed), vec!["mine"]);
}
