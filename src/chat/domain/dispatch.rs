//! Result type returned by the dispatcher for every inbound message.

use super::CommandKind;

/// Outcome of dispatching one inbound message.
///
/// The reply string is non-empty on every path, success or failure; the
/// messaging boundary can always forward it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    success: bool,
    reply: String,
    command: CommandKind,
}

impl DispatchResult {
    /// Creates a successful result.
    #[must_use]
    pub fn ok(command: CommandKind, reply: impl Into<String>) -> Self {
        Self {
            success: true,
            reply: reply.into(),
            command,
        }
    }

    /// Creates a failed result carrying a user-facing reply.
    #[must_use]
    pub fn failed(command: CommandKind, reply: impl Into<String>) -> Self {
        Self {
            success: false,
            reply: reply.into(),
            command,
        }
    }

    /// Returns whether the command succeeded.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Returns the user-facing reply text.
    #[must_use]
    pub fn reply(&self) -> &str {
        &self.reply
    }

    /// Returns the command the message was classified as.
    #[must_use]
    pub const fn command(&self) -> CommandKind {
        self.command
    }

    /// Consumes the result and returns the reply text.
    #[must_use]
    pub fn into_reply(self) -> String {
        self.reply
    }
}
