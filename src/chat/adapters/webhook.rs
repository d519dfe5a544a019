//! Webhook processors turning channel notifications into task operations.
//!
//! Two flavours share the payload traversal: [`DispatchWebhook`] runs the
//! full command dispatcher and replies conversationally, while
//! [`CaptureWebhook`] treats every message as a task to capture and answers
//! with a bare acknowledgement.

use mockable::Clock;
use std::sync::Arc;

use crate::chat::adapters::whatsapp::{BUSINESS_ACCOUNT_OBJECT, InboundMessage, WebhookPayload};
use crate::chat::ports::{ChatChannel, RecategorizeQueue, TaskExtractor};
use crate::chat::services::{LenientExtractor, MessageDispatcher};
use crate::task::{
    domain::{OwnerId, PhoneNumber, Task, TaskDraft},
    ports::{OwnerRepository, TaskStore},
    services::OwnerDirectory,
};

/// Captured tasks whose category is absent or whose confidence falls below
/// this threshold are queued for re-categorization.
pub const RECATEGORIZE_CONFIDENCE: f64 = 0.7;

/// Minimal acknowledgement the capture flow replies with.
pub const CAPTURE_ACK: &str = "✅";

const PROCESSING_FAILURE_REPLY: &str =
    "❌ Sorry, I had trouble processing your message. Please try again.";

/// Outcome of processing one webhook notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookReceipt {
    /// The notification was recognized; carries the number of text messages
    /// handled (possibly zero).
    Processed(usize),
    /// The notification was not a business-account notification.
    Ignored,
}

fn text_messages(payload: &WebhookPayload) -> impl Iterator<Item = (&InboundMessage, &str)> {
    payload
        .entry
        .iter()
        .flat_map(|entry| entry.changes.iter())
        .filter_map(|change| change.value.messages.as_deref())
        .flatten()
        .filter_map(|message| message.text_body().map(|text| (message, text)))
}

/// Conversational webhook processor.
///
/// Each text message is marked read, acknowledged with a pending reaction,
/// dispatched through the command core, and answered with the dispatcher's
/// reply. Channel failures are logged and never fail the notification.
pub struct DispatchWebhook<S, X, R, C, Ch>
where
    S: TaskStore,
    X: TaskExtractor,
    R: OwnerRepository,
    C: Clock + Send + Sync,
    Ch: ChatChannel,
{
    dispatcher: MessageDispatcher<S, X, C>,
    directory: OwnerDirectory<R, C>,
    channel: Arc<Ch>,
}

impl<S, X, R, C, Ch> DispatchWebhook<S, X, R, C, Ch>
where
    S: TaskStore,
    X: TaskExtractor,
    R: OwnerRepository,
    C: Clock + Send + Sync,
    Ch: ChatChannel,
{
    /// Creates a conversational webhook processor.
    #[must_use]
    pub const fn new(
        dispatcher: MessageDispatcher<S, X, C>,
        directory: OwnerDirectory<R, C>,
        channel: Arc<Ch>,
    ) -> Self {
        Self {
            dispatcher,
            directory,
            channel,
        }
    }

    /// Processes one webhook notification.
    pub async fn process(&self, payload: &WebhookPayload) -> WebhookReceipt {
        if payload.object != BUSINESS_ACCOUNT_OBJECT {
            return WebhookReceipt::Ignored;
        }

        let mut handled = 0usize;
        for (message, text) in text_messages(payload) {
            self.handle_message(message, text).await;
            handled = handled.saturating_add(1);
        }
        WebhookReceipt::Processed(handled)
    }

    async fn handle_message(&self, message: &InboundMessage, text: &str) {
        let sender = match PhoneNumber::normalize(&message.from) {
            Ok(sender) => sender,
            Err(err) => {
                tracing::warn!(from = %message.from, error = %err, "unusable sender; skipping");
                return;
            }
        };

        if let Err(err) = self.channel.mark_read(&message.id).await {
            tracing::warn!(message_id = %message.id, error = %err, "mark-read failed");
        }
        if let Err(err) = self.channel.send_reaction(&sender, &message.id, "⏳").await {
            tracing::warn!(message_id = %message.id, error = %err, "pending reaction failed");
        }

        let owner = match self.directory.find_or_create(&sender).await {
            Ok(owner) => owner,
            Err(err) => {
                tracing::error!(sender = %sender, error = %err, "owner resolution failed");
                self.report_failure(&sender, &message.id).await;
                return;
            }
        };

        let result = self.dispatcher.handle(&sender, text, owner.id()).await;
        match self.channel.send_text(&sender, result.reply()).await {
            Ok(()) => {
                if let Err(err) = self.channel.send_reaction(&sender, &message.id, "✅").await {
                    tracing::warn!(message_id = %message.id, error = %err, "done reaction failed");
                }
            }
            Err(err) => {
                tracing::error!(sender = %sender, error = %err, "reply delivery failed");
                self.report_failure(&sender, &message.id).await;
            }
        }
    }

    async fn report_failure(&self, sender: &PhoneNumber, message_id: &str) {
        if let Err(err) = self.channel.send_reaction(sender, message_id, "❌").await {
            tracing::warn!(message_id = %message_id, error = %err, "failure reaction failed");
        }
        if let Err(err) = self
            .channel
            .send_text(sender, PROCESSING_FAILURE_REPLY)
            .await
        {
            tracing::warn!(sender = %sender, error = %err, "failure reply failed");
        }
    }
}

/// Capture-only webhook processor.
///
/// Every text message becomes a task; nothing is rejected. When the primary
/// insert fails a minimal fallback row is inserted so the message is never
/// lost. Tasks captured without a category, or below the confidence
/// threshold, are queued for re-categorization.
pub struct CaptureWebhook<S, X, R, C, Ch, Q>
where
    S: TaskStore,
    X: TaskExtractor,
    R: OwnerRepository,
    C: Clock + Send + Sync,
    Ch: ChatChannel,
    Q: RecategorizeQueue,
{
    store: Arc<S>,
    extractor: LenientExtractor<X>,
    directory: OwnerDirectory<R, C>,
    channel: Arc<Ch>,
    queue: Arc<Q>,
    clock: Arc<C>,
    silent: bool,
}

impl<S, X, R, C, Ch, Q> CaptureWebhook<S, X, R, C, Ch, Q>
where
    S: TaskStore,
    X: TaskExtractor,
    R: OwnerRepository,
    C: Clock + Send + Sync,
    Ch: ChatChannel,
    Q: RecategorizeQueue,
{
    /// Creates a capture webhook processor that acknowledges each capture.
    #[must_use]
    pub const fn new(
        store: Arc<S>,
        extractor: LenientExtractor<X>,
        directory: OwnerDirectory<R, C>,
        channel: Arc<Ch>,
        queue: Arc<Q>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            store,
            extractor,
            directory,
            channel,
            queue,
            clock,
            silent: false,
        }
    }

    /// Toggles silent mode; when silent, no acknowledgement is sent.
    #[must_use]
    pub const fn with_silent_mode(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Processes one webhook notification.
    pub async fn process(&self, payload: &WebhookPayload) -> WebhookReceipt {
        if payload.object != BUSINESS_ACCOUNT_OBJECT {
            return WebhookReceipt::Ignored;
        }

        let mut handled = 0usize;
        for (message, text) in text_messages(payload) {
            if let Err(err) = self.channel.mark_read(&message.id).await {
                tracing::warn!(message_id = %message.id, error = %err, "mark-read failed");
            }

            self.capture(&message.from, text).await;

            if !self.silent
                && let Ok(sender) = PhoneNumber::normalize(&message.from)
                && let Err(err) = self.channel.send_text(&sender, CAPTURE_ACK).await
            {
                tracing::warn!(sender = %sender, error = %err, "acknowledgement failed");
            }
            handled = handled.saturating_add(1);
        }
        WebhookReceipt::Processed(handled)
    }

    /// Captures one message as a task; absorbs every failure.
    async fn capture(&self, raw_from: &str, text: &str) {
        let sender = match PhoneNumber::normalize(raw_from) {
            Ok(sender) => sender,
            Err(err) => {
                tracing::warn!(from = %raw_from, error = %err, "unusable sender; dropping message");
                return;
            }
        };

        let owner = match self.directory.find_or_create(&sender).await {
            Ok(owner) => owner,
            Err(err) => {
                tracing::error!(sender = %sender, error = %err, "owner resolution failed");
                return;
            }
        };

        let parsed = self.extractor.extract(text).await;
        let stored = match Task::new(owner.id(), parsed.to_draft(text), &*self.clock) {
            Ok(task) => match self.store.store(&task).await {
                Ok(()) => Some(task),
                Err(err) => {
                    tracing::error!(error = %err, "task insert failed; trying fallback insert");
                    None
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "task construction failed; trying fallback insert");
                None
            }
        };

        match stored {
            Some(task) => {
                tracing::info!(task_id = %task.id(), owner_id = %owner.id(), "task captured");
                if parsed.category.is_none() || parsed.confidence < RECATEGORIZE_CONFIDENCE {
                    self.queue.schedule(task.id(), text);
                }
            }
            None => self.fallback_insert(owner.id(), text).await,
        }
    }

    /// Minimal insert keeping just the raw text, used when the primary
    /// insert fails.
    async fn fallback_insert(&self, owner_id: OwnerId, text: &str) {
        let task = match Task::new(owner_id, TaskDraft::new(text), &*self.clock) {
            Ok(task) => task,
            Err(err) => {
                tracing::error!(error = %err, "fallback task construction failed; message lost");
                return;
            }
        };
        match self.store.store(&task).await {
            Ok(()) => {
                tracing::info!(task_id = %task.id(), owner_id = %owner_id, "fallback task captured");
            }
            Err(err) => {
                tracing::error!(error = %err, "fallback insert failed; message lost");
            }
        }
    }
}
