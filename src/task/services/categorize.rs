//! Explicit categorization flow for flagged tasks.

use crate::task::{
    domain::{Task, TaskId},
    ports::{Categorizer, CategorizerError, TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by the categorization service.
#[derive(Debug, Error)]
pub enum CategorizeError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The categorization oracle failed.
    #[error(transparent)]
    Oracle(#[from] CategorizerError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Assigns a category to a stored task and clears its triage flag.
///
/// This is the only flow allowed to clear `is_flagged`; message handlers
/// never touch the flag.
#[derive(Clone)]
pub struct CategorizeService<S, O, C>
where
    S: TaskStore,
    O: Categorizer,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    oracle: Arc<O>,
    clock: Arc<C>,
}

impl<S, O, C> CategorizeService<S, O, C>
where
    S: TaskStore,
    O: Categorizer,
    C: Clock + Send + Sync,
{
    /// Creates a new categorization service.
    #[must_use]
    pub const fn new(store: Arc<S>, oracle: Arc<O>, clock: Arc<C>) -> Self {
        Self {
            store,
            oracle,
            clock,
        }
    }

    /// Categorizes the task with the given identifier and persists the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`CategorizeError::TaskNotFound`] for unknown identifiers,
    /// [`CategorizeError::Oracle`] when the oracle fails, and
    /// [`CategorizeError::Store`] when persistence fails.
    pub async fn categorize_task(&self, id: TaskId) -> Result<Task, CategorizeError> {
        let mut task = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CategorizeError::TaskNotFound(id))?;

        let category = self.oracle.categorize(task.content()).await?;
        task.set_category(category, &*self.clock);
        self.store.update(&task).await?;
        Ok(task)
    }
}
