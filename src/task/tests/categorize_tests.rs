//! Tests for the explicit categorization service.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{OwnerId, PersistedTaskData, Priority, Task, TaskId, TaskStatus},
    ports::{Categorizer, CategorizerError, TaskStore},
    services::{CategorizeError, CategorizeService},
};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

/// Oracle double answering every request with a fixed category.
struct FixedCategorizer(&'static str);

#[async_trait]
impl Categorizer for FixedCategorizer {
    async fn categorize(&self, _content: &str) -> Result<String, CategorizerError> {
        Ok(self.0.to_owned())
    }
}

/// Oracle double that is always unavailable.
struct BrokenCategorizer;

#[async_trait]
impl Categorizer for BrokenCategorizer {
    async fn categorize(&self, _content: &str) -> Result<String, CategorizerError> {
        Err(CategorizerError::Unavailable("offline".to_owned()))
    }
}

#[fixture]
fn store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

fn flagged_task() -> Task {
    let created = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        owner_id: OwnerId::new(),
        title: None,
        content: "Pay council tax".to_owned(),
        summary: None,
        due_date: None,
        priority: Priority::Medium,
        status: TaskStatus::Pending,
        category: None,
        is_flagged: true,
        created_at: created,
        updated_at: created,
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn categorize_task_assigns_category_and_persists(store: Arc<InMemoryTaskStore>) {
    let task = flagged_task();
    store.store(&task).await.expect("insert succeeds");

    let service = CategorizeService::new(
        Arc::clone(&store),
        Arc::new(FixedCategorizer("Finance")),
        Arc::new(DefaultClock),
    );

    let updated = service
        .categorize_task(task.id())
        .await
        .expect("categorization succeeds");

    assert_eq!(updated.category(), Some("Finance"));
    assert!(!updated.is_flagged());

    let persisted = store
        .find_by_id(task.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(persisted.category(), Some("Finance"));
    assert!(!persisted.is_flagged());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn categorize_task_reports_missing_task(store: Arc<InMemoryTaskStore>) {
    let service = CategorizeService::new(
        store,
        Arc::new(FixedCategorizer("Work")),
        Arc::new(DefaultClock),
    );

    let missing = TaskId::new();
    let result = service.categorize_task(missing).await;
    assert!(matches!(result, Err(CategorizeError::TaskNotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn categorize_task_propagates_oracle_failure(store: Arc<InMemoryTaskStore>) {
    let task = flagged_task();
    store.store(&task).await.expect("insert succeeds");

    let service = CategorizeService::new(
        Arc::clone(&store),
        Arc::new(BrokenCategorizer),
        Arc::new(DefaultClock),
    );

    let result = service.categorize_task(task.id()).await;
    assert!(matches!(result, Err(CategorizeError::Oracle(_))));

    let persisted = store
        .find_by_id(task.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    assert!(persisted.is_flagged());
    assert_eq!(persisted.category(), None);
}
