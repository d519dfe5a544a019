//! In-memory implementations of the messaging-side ports.
//!
//! Used in tests and local runs; each implementation records what it was
//! asked to do so assertions can inspect the traffic.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::chat::domain::ParsedTask;
use crate::chat::ports::{
    ChannelError, ChatChannel, ExtractorError, RecategorizeQueue, TaskExtractor,
};
use crate::task::domain::{PhoneNumber, TaskId};

/// A text message captured by [`InMemoryChatChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentText {
    /// Recipient phone number.
    pub to: PhoneNumber,
    /// Message body.
    pub body: String,
}

/// Recording in-memory channel.
///
/// Succeeds by default; [`InMemoryChatChannel::failing`] builds a variant
/// whose every call returns a transport error, for exercising the callers'
/// log-and-continue paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatChannel {
    fail: bool,
    texts: Arc<Mutex<Vec<SentText>>>,
    reactions: Arc<Mutex<Vec<(PhoneNumber, String, String)>>>,
    read_ids: Arc<Mutex<Vec<String>>>,
}

impl InMemoryChatChannel {
    /// Creates a channel that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel that rejects everything with a transport error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns the text messages sent so far.
    #[must_use]
    pub fn sent_texts(&self) -> Vec<SentText> {
        self.texts.lock().map(|texts| texts.clone()).unwrap_or_default()
    }

    /// Returns the reactions sent so far as `(to, message_id, emoji)`.
    #[must_use]
    pub fn sent_reactions(&self) -> Vec<(PhoneNumber, String, String)> {
        self.reactions
            .lock()
            .map(|reactions| reactions.clone())
            .unwrap_or_default()
    }

    /// Returns the message identifiers marked as read so far.
    #[must_use]
    pub fn read_message_ids(&self) -> Vec<String> {
        self.read_ids.lock().map(|ids| ids.clone()).unwrap_or_default()
    }

    fn guard(&self) -> Result<(), ChannelError> {
        if self.fail {
            return Err(ChannelError::Transport("simulated transport failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChatChannel for InMemoryChatChannel {
    async fn send_text(&self, to: &PhoneNumber, body: &str) -> Result<(), ChannelError> {
        self.guard()?;
        self.texts
            .lock()
            .map_err(|err| ChannelError::Transport(err.to_string()))?
            .push(SentText {
                to: to.clone(),
                body: body.to_owned(),
            });
        Ok(())
    }

    async fn send_reaction(
        &self,
        to: &PhoneNumber,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), ChannelError> {
        self.guard()?;
        self.reactions
            .lock()
            .map_err(|err| ChannelError::Transport(err.to_string()))?
            .push((to.clone(), message_id.to_owned(), emoji.to_owned()));
        Ok(())
    }

    async fn mark_read(&self, message_id: &str) -> Result<(), ChannelError> {
        self.guard()?;
        self.read_ids
            .lock()
            .map_err(|err| ChannelError::Transport(err.to_string()))?
            .push(message_id.to_owned());
        Ok(())
    }
}

/// Extractor that replays a queue of scripted outcomes.
///
/// Each call consumes the next scripted response; an exhausted script
/// answers with [`ExtractorError::Unavailable`], which the lenient boundary
/// turns into the fallback projection.
#[derive(Debug, Default)]
pub struct ScriptedExtractor {
    script: Mutex<VecDeque<Result<ParsedTask, ExtractorError>>>,
}

impl ScriptedExtractor {
    /// Creates an extractor replaying the given outcomes in order.
    #[must_use]
    pub fn with_script(
        script: impl IntoIterator<Item = Result<ParsedTask, ExtractorError>>,
    ) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    /// Creates an extractor that answers every call with the same projection.
    #[must_use]
    pub fn always(parsed: ParsedTask) -> Self {
        Self::with_script([Ok(parsed)])
    }

    fn next(&self) -> Result<ParsedTask, ExtractorError> {
        let mut script = self
            .script
            .lock()
            .map_err(|err| ExtractorError::Unavailable(err.to_string()))?;
        if script.len() == 1 {
            // A single-entry script repeats forever.
            return script
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ExtractorError::Unavailable("script exhausted".into())));
        }
        script
            .pop_front()
            .unwrap_or_else(|| Err(ExtractorError::Unavailable("script exhausted".into())))
    }
}

#[async_trait]
impl TaskExtractor for ScriptedExtractor {
    async fn extract(&self, _text: &str) -> Result<ParsedTask, ExtractorError> {
        self.next()
    }
}

/// Queue that drops every scheduling request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecategorizeQueue;

impl RecategorizeQueue for NoopRecategorizeQueue {
    fn schedule(&self, _task_id: TaskId, _original_text: &str) {}
}

/// Queue that records every scheduling request for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingRecategorizeQueue {
    scheduled: Arc<Mutex<Vec<(TaskId, String)>>>,
}

impl RecordingRecategorizeQueue {
    /// Creates an empty recording queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scheduled entries as `(task_id, original_text)`.
    #[must_use]
    pub fn scheduled(&self) -> Vec<(TaskId, String)> {
        self.scheduled
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl RecategorizeQueue for RecordingRecategorizeQueue {
    fn schedule(&self, task_id: TaskId, original_text: &str) {
        if let Ok(mut entries) = self.scheduled.lock() {
            entries.push((task_id, original_text.to_owned()));
        }
    }
}
