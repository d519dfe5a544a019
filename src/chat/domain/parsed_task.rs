//! Projection of a chat message as guessed by the extraction oracle.

use crate::task::domain::{Priority, TaskDraft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confidence reported when the oracle fails and the raw text is projected
/// as-is.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// Best-effort structured guess the extraction oracle makes about a message.
///
/// Never absent as a whole: oracle failures degrade to
/// [`ParsedTask::fallback`], which projects the raw message text with low
/// confidence. No field is guaranteed correct; `confidence` is the oracle's
/// own estimate in `[0, 1]` that the extraction is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Short title, when the oracle found one.
    pub title: Option<String>,
    /// The task content; falls back to the raw message text.
    pub content: String,
    /// One-line summary, when the oracle found one.
    pub summary: Option<String>,
    /// Due date as an ISO-8601 string, when the oracle found one.
    pub due_date: Option<String>,
    /// Urgency guess; defaults to medium.
    pub priority: Priority,
    /// Category guess, when the oracle found one.
    pub category: Option<String>,
    /// Oracle-reported certainty in `[0, 1]`.
    pub confidence: f64,
}

impl ParsedTask {
    /// Fallback projection used whenever the oracle fails: the raw message
    /// becomes the content, everything else is absent, and confidence drops
    /// to [`FALLBACK_CONFIDENCE`].
    #[must_use]
    pub fn fallback(raw_text: &str) -> Self {
        Self {
            title: None,
            content: raw_text.to_owned(),
            summary: None,
            due_date: None,
            priority: Priority::Medium,
            category: None,
            confidence: FALLBACK_CONFIDENCE,
        }
    }

    /// Parses the due date as an RFC 3339 timestamp.
    ///
    /// Unparseable values are treated as absent rather than as errors; the
    /// oracle's output is advisory.
    #[must_use]
    pub fn due_date_utc(&self) -> Option<DateTime<Utc>> {
        self.due_date
            .as_deref()
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Builds a task draft from the extracted fields.
    ///
    /// Empty extracted content falls back to the raw message text, so the
    /// draft always carries something the task invariant can accept (unless
    /// the raw message itself is blank).
    #[must_use]
    pub fn to_draft(&self, raw_text: &str) -> TaskDraft {
        let content = if self.content.trim().is_empty() {
            raw_text
        } else {
            self.content.as_str()
        };

        let mut draft = TaskDraft::new(content).with_priority(self.priority);
        if let Some(title) = &self.title {
            draft = draft.with_title(title.clone());
        }
        if let Some(summary) = &self.summary {
            draft = draft.with_summary(summary.clone());
        }
        if let Some(due) = self.due_date_utc() {
            draft = draft.with_due_date(due);
        }
        if let Some(category) = &self.category {
            draft = draft.with_category(category.clone());
        }
        draft
    }
}
