//! Port for the outbound messaging channel.

use crate::task::domain::PhoneNumber;
use async_trait::async_trait;
use thiserror::Error;

/// Outbound messaging contract: send text, react, mark read.
///
/// Delivery is fire-and-forget relative to the core's own success or failure
/// determination: a failed delivery must never alter task store state that
/// has already been committed. Callers log channel errors and continue.
#[async_trait]
pub trait ChatChannel: Send + Sync {
    /// Sends a text message to a recipient.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the channel rejects the request or the
    /// transport fails.
    async fn send_text(&self, to: &PhoneNumber, body: &str) -> Result<(), ChannelError>;

    /// Attaches an emoji reaction to a previously received message.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the channel rejects the request or the
    /// transport fails.
    async fn send_reaction(
        &self,
        to: &PhoneNumber,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), ChannelError>;

    /// Marks a received message as read.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the channel rejects the request or the
    /// transport fails.
    async fn mark_read(&self, message_id: &str) -> Result<(), ChannelError>;
}

/// Errors returned by messaging channel implementations.
#[derive(Debug, Clone, Error)]
pub enum ChannelError {
    /// The transport failed before the channel answered.
    #[error("channel transport error: {0}")]
    Transport(String),

    /// The channel answered with a non-success status.
    #[error("channel rejected request: {0}")]
    Rejected(String),

    /// The channel adapter is missing required configuration.
    #[error("channel not configured: {0}")]
    NotConfigured(String),
}
