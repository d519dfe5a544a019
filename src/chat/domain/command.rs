//! Command classification for inbound chat messages.

use std::fmt;

/// Exact phrases that list pending tasks.
const LIST_PHRASES: [&str; 4] = ["list", "tasks", "show tasks", "my tasks"];

/// Prefixes that mark a task as done, e.g. "done 1", "complete task 1".
const DONE_PREFIXES: [&str; 3] = ["done ", "complete ", "finish "];

/// Prefixes that cancel a task, e.g. "cancel 1", "delete 2".
const CANCEL_PREFIXES: [&str; 3] = ["cancel ", "delete ", "remove "];

/// Exact phrases that request the usage message.
const HELP_PHRASES: [&str; 3] = ["help", "commands", "?"];

/// The closed set of commands an inbound message can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// List pending tasks.
    List,
    /// Mark a task at a 1-based position as completed.
    Done,
    /// Cancel a task at a 1-based position.
    Cancel,
    /// Show the usage message.
    Help,
    /// Create a task from free-form text; the default for anything else.
    Task,
}

impl CommandKind {
    /// Classifies a raw message into a command kind.
    ///
    /// Total and infallible: matching is case-insensitive after trimming, the
    /// rules are checked in precedence order, and any message that matches no
    /// explicit command is deliberately treated as a task-creation request so
    /// the system never refuses input.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();

        if LIST_PHRASES.contains(&normalized.as_str()) {
            return Self::List;
        }
        if DONE_PREFIXES
            .iter()
            .any(|prefix| normalized.starts_with(prefix))
        {
            return Self::Done;
        }
        if CANCEL_PREFIXES
            .iter()
            .any(|prefix| normalized.starts_with(prefix))
        {
            return Self::Cancel;
        }
        if HELP_PHRASES.contains(&normalized.as_str()) {
            return Self::Help;
        }
        Self::Task
    }

    /// Returns the canonical name of the command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Done => "done",
            Self::Cancel => "cancel",
            Self::Help => "help",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the first run of decimal digits in the text as a task position.
///
/// Returns `None` when the text contains no digits or the run does not fit a
/// `usize`.
#[must_use]
pub fn first_task_number(text: &str) -> Option<usize> {
    let digits: String = text
        .chars()
        .skip_while(|ch| !ch.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
