//! Lenient extraction boundary around the oracle port.

use crate::chat::domain::ParsedTask;
use crate::chat::ports::TaskExtractor;
use std::sync::Arc;
use std::time::Duration;

/// Bound applied to every oracle call when none is configured explicitly.
pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(10);

/// The single no-throw boundary around the extraction oracle.
///
/// Applies a bounded timeout to every call and converts both timeouts and
/// adapter errors into [`ParsedTask::fallback`], so callers always receive a
/// usable projection. Oracle failures are absorbed here, once, rather than
/// handled at every call site.
#[derive(Clone)]
pub struct LenientExtractor<X>
where
    X: TaskExtractor,
{
    inner: Arc<X>,
    timeout: Duration,
}

impl<X> LenientExtractor<X>
where
    X: TaskExtractor,
{
    /// Wraps an extractor with the default timeout.
    #[must_use]
    pub const fn new(inner: Arc<X>) -> Self {
        Self::with_timeout(inner, DEFAULT_EXTRACTION_TIMEOUT)
    }

    /// Wraps an extractor with an explicit timeout.
    #[must_use]
    pub const fn with_timeout(inner: Arc<X>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Extracts structured task fields, never failing.
    pub async fn extract(&self, text: &str) -> ParsedTask {
        match tokio::time::timeout(self.timeout, self.inner.extract(text)).await {
            Ok(Ok(parsed)) => parsed,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "extraction oracle failed; using fallback projection");
                ParsedTask::fallback(text)
            }
            Err(_) => {
                tracing::warn!(
                    timeout = ?self.timeout,
                    "extraction oracle timed out; using fallback projection"
                );
                ParsedTask::fallback(text)
            }
        }
    }
}
