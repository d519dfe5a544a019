//! Port for the natural-language extraction oracle.

use crate::chat::domain::ParsedTask;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Extraction oracle contract.
///
/// Implementations are allowed to fail; the lenient boundary in
/// [`crate::chat::services::LenientExtractor`] converts every failure into
/// the fallback projection. Nothing else in the core calls an extractor
/// directly.
#[async_trait]
pub trait TaskExtractor: Send + Sync {
    /// Extracts structured task fields from raw message text.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError`] when the oracle is unreachable or replies
    /// with something unusable.
    async fn extract(&self, text: &str) -> Result<ParsedTask, ExtractorError>;
}

/// Errors returned by extraction oracle implementations.
#[derive(Debug, Clone, Error)]
pub enum ExtractorError {
    /// The oracle could not be reached or returned a transport error.
    #[error("extraction oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle response could not be interpreted.
    #[error("malformed oracle response: {0}")]
    MalformedResponse(String),

    /// The oracle did not answer within the bounded timeout.
    #[error("extraction timed out after {0:?}")]
    Timeout(Duration),
}
