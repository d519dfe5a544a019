//! Port for the external categorization oracle.

use async_trait::async_trait;
use thiserror::Error;

/// Category assignment contract for the triage flow.
///
/// Given task content, returns a single category name from the fixed menu the
/// oracle was instructed with (work, personal, shopping, health, finance,
/// education, home, other).
#[async_trait]
pub trait Categorizer: Send + Sync {
    /// Picks a category for the given task content.
    ///
    /// # Errors
    ///
    /// Returns [`CategorizerError`] when the oracle is unreachable or replies
    /// with something unusable.
    async fn categorize(&self, content: &str) -> Result<String, CategorizerError>;
}

/// Errors returned by categorizer implementations.
#[derive(Debug, Clone, Error)]
pub enum CategorizerError {
    /// The oracle could not be reached or returned a transport error.
    #[error("categorizer unavailable: {0}")]
    Unavailable(String),

    /// The oracle response could not be interpreted.
    #[error("malformed categorizer response: {0}")]
    MalformedResponse(String),
}
