//! Command dispatch: the single entry point for inbound messages.

use crate::chat::domain::{CommandKind, DispatchResult, first_task_number, resolve_by_position};
use crate::chat::ports::TaskExtractor;
use crate::chat::services::{LenientExtractor, render};
use crate::task::{
    domain::{OwnerId, PhoneNumber, Task, TaskDomainError},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Maximum number of pending tasks addressable by position.
///
/// Done/cancel re-run the identical query, so a position is always resolved
/// against the same window the user last saw listed.
pub const PENDING_TASK_LIMIT: i64 = 20;

/// Minimum oracle confidence the strict creation policy accepts.
const MIN_CREATE_CONFIDENCE: f64 = 0.4;

/// Errors produced by command handlers before the dispatcher absorbs them.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The user's input was unusable; the reply tells them how to fix it.
    #[error("{reply}")]
    UserInput {
        /// Corrective reply to surface verbatim.
        reply: String,
    },

    /// Task store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// Domain invariant rejected the operation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

impl HandlerError {
    fn user_input(reply: impl Into<String>) -> Self {
        Self::UserInput {
            reply: reply.into(),
        }
    }
}

/// Routes an inbound message through classification to the matching handler.
///
/// Owns the no-throw guarantee at the boundary: every input produces a
/// [`DispatchResult`] with a non-empty reply, regardless of downstream
/// failures. Side effects (store writes, oracle calls) are confined to the
/// handlers; the dispatcher itself performs no I/O beyond invoking the
/// selected handler.
#[derive(Clone)]
pub struct MessageDispatcher<S, X, C>
where
    S: TaskStore,
    X: TaskExtractor,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    extractor: LenientExtractor<X>,
    clock: Arc<C>,
}

impl<S, X, C> MessageDispatcher<S, X, C>
where
    S: TaskStore,
    X: TaskExtractor,
    C: Clock + Send + Sync,
{
    /// Creates a new dispatcher.
    #[must_use]
    pub const fn new(store: Arc<S>, extractor: LenientExtractor<X>, clock: Arc<C>) -> Self {
        Self {
            store,
            extractor,
            clock,
        }
    }

    /// Handles one inbound message and returns the reply to deliver.
    ///
    /// User-input problems surface as corrective replies with
    /// `success = false`; store and internal failures are logged and
    /// converted to a command-specific apology. Nothing escapes as an error.
    pub async fn handle(
        &self,
        sender: &PhoneNumber,
        text: &str,
        owner_id: OwnerId,
    ) -> DispatchResult {
        let command = CommandKind::classify(text);
        let outcome = match command {
            CommandKind::List => self.handle_list(owner_id).await,
            CommandKind::Done => self.handle_done(text, owner_id).await,
            CommandKind::Cancel => self.handle_cancel(text, owner_id).await,
            CommandKind::Help => Ok(render::HELP_TEXT.to_owned()),
            CommandKind::Task => self.handle_create(text, owner_id).await,
        };

        match outcome {
            Ok(reply) => {
                tracing::debug!(sender = %sender, command = %command, "message handled");
                DispatchResult::ok(command, reply)
            }
            Err(HandlerError::UserInput { reply }) => DispatchResult::failed(command, reply),
            Err(err) => {
                tracing::error!(
                    sender = %sender,
                    command = %command,
                    error = %err,
                    "command handler failed"
                );
                DispatchResult::failed(command, failure_reply(command))
            }
        }
    }

    /// Fresh positional snapshot of the owner's pending tasks.
    async fn pending_snapshot(&self, owner_id: OwnerId) -> Result<Vec<Task>, HandlerError> {
        Ok(self.store.list_pending(owner_id, PENDING_TASK_LIMIT).await?)
    }

    async fn handle_list(&self, owner_id: OwnerId) -> Result<String, HandlerError> {
        let tasks = self.pending_snapshot(owner_id).await?;
        if tasks.is_empty() {
            return Ok(render::NO_PENDING_TASKS.to_owned());
        }
        Ok(render::task_list(&tasks, self.clock.utc().date_naive()))
    }

    async fn handle_done(&self, text: &str, owner_id: OwnerId) -> Result<String, HandlerError> {
        let mut task = self.resolve_addressed_task(text, owner_id, "done 1").await?;
        task.complete(&*self.clock)?;
        self.store.update(&task).await?;
        Ok(render::done_confirmation(&task))
    }

    async fn handle_cancel(&self, text: &str, owner_id: OwnerId) -> Result<String, HandlerError> {
        let mut task = self
            .resolve_addressed_task(text, owner_id, "cancel 1")
            .await?;
        task.cancel(&*self.clock)?;
        self.store.update(&task).await?;
        Ok(render::cancel_confirmation(&task))
    }

    /// Resolves the task a done/cancel message addresses by position.
    ///
    /// Re-queries the pending set fresh; the snapshot is never cached, so the
    /// position refers to the current ordering at resolution time.
    async fn resolve_addressed_task(
        &self,
        text: &str,
        owner_id: OwnerId,
        example: &str,
    ) -> Result<Task, HandlerError> {
        let Some(position) = first_task_number(text) else {
            return Err(HandlerError::user_input(render::missing_task_number(
                example,
            )));
        };

        let snapshot = self.pending_snapshot(owner_id).await?;
        if snapshot.is_empty() {
            return Err(HandlerError::user_input(render::NO_TASKS_TO_ADDRESS));
        }

        resolve_by_position(&snapshot, position)
            .cloned()
            .ok_or_else(|| {
                HandlerError::user_input(render::task_number_out_of_range(snapshot.len()))
            })
    }

    /// Default path: create a task from free-form text (strict policy).
    ///
    /// Rejects without writing when the oracle's content is empty or its
    /// confidence is below the threshold; this is the one rejection path in
    /// the whole core.
    async fn handle_create(&self, text: &str, owner_id: OwnerId) -> Result<String, HandlerError> {
        let parsed = self.extractor.extract(text).await;
        if parsed.content.trim().is_empty() || parsed.confidence < MIN_CREATE_CONFIDENCE {
            return Err(HandlerError::user_input(render::CREATION_GUIDANCE));
        }

        let task = Task::new(owner_id, parsed.to_draft(text), &*self.clock)?;
        self.store.store(&task).await?;
        tracing::info!(task_id = %task.id(), owner_id = %owner_id, "task captured");
        Ok(render::creation_confirmation(&task))
    }
}

/// Command-specific apology used when a handler fails internally.
const fn failure_reply(command: CommandKind) -> &'static str {
    match command {
        CommandKind::List => "❌ Sorry, I had trouble fetching your tasks.",
        CommandKind::Done => "❌ Failed to mark task as done",
        CommandKind::Cancel => "❌ Failed to cancel task",
        CommandKind::Task => "❌ Sorry, I had trouble creating your task. Please try again.",
        CommandKind::Help => "❌ Sorry, something went wrong. Please try again.",
    }
}
