//! Repository ports for task and owner persistence.

use crate::task::domain::{Owner, OwnerId, PhoneNumber, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// All operations are independent single-row operations; no transaction
/// spanning multiple calls is assumed anywhere in the core.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskStoreResult<()>;

    /// Persists changes to an existing task (status, category, flag,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns the owner's pending tasks in positional order.
    ///
    /// Ordering contract: due date ascending with absent due dates last,
    /// tie-broken by creation time ascending, capped at `limit` rows. Every
    /// implementation must order identically, because the 1-based position in
    /// this listing is the addressing scheme users reference in done/cancel
    /// commands.
    async fn list_pending(&self, owner_id: OwnerId, limit: i64) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Result type for owner repository operations.
pub type OwnerRepositoryResult<T> = Result<T, OwnerRepositoryError>;

/// Owner persistence contract.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Stores a new owner.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerRepositoryError::DuplicatePhoneNumber`] when an owner
    /// with the same normalized number already exists.
    async fn store(&self, owner: &Owner) -> OwnerRepositoryResult<()>;

    /// Finds an owner by normalized phone number.
    ///
    /// Returns `None` when no owner uses the number.
    async fn find_by_phone(&self, phone: &PhoneNumber) -> OwnerRepositoryResult<Option<Owner>>;
}

/// Errors returned by owner repository implementations.
#[derive(Debug, Clone, Error)]
pub enum OwnerRepositoryError {
    /// An owner with the same normalized phone number already exists.
    #[error("duplicate owner for phone number {0}")]
    DuplicatePhoneNumber(PhoneNumber),

    /// An owner with the same identifier already exists.
    #[error("duplicate owner identifier: {0}")]
    DuplicateOwner(OwnerId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OwnerRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
