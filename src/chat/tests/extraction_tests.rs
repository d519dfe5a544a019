//! Tests for the oracle projection and the lenient extraction boundary.

use std::sync::Arc;
use std::time::Duration;

use crate::chat::adapters::ScriptedExtractor;
use crate::chat::domain::{FALLBACK_CONFIDENCE, ParsedTask};
use crate::chat::ports::{ExtractorError, TaskExtractor};
use crate::chat::services::LenientExtractor;
use crate::task::domain::Priority;
use async_trait::async_trait;
use rstest::rstest;

fn parsed(content: &str, confidence: f64) -> ParsedTask {
    ParsedTask {
        title: None,
        content: content.to_owned(),
        summary: None,
        due_date: None,
        priority: Priority::Medium,
        category: None,
        confidence,
    }
}

// ============================================================================
// ParsedTask projection
// ============================================================================

#[rstest]
fn fallback_projects_raw_text_with_low_confidence() {
    let fallback = ParsedTask::fallback("Buy groceries tomorrow");

    assert_eq!(fallback.content, "Buy groceries tomorrow");
    assert_eq!(fallback.confidence, FALLBACK_CONFIDENCE);
    assert_eq!(fallback.priority, Priority::Medium);
    assert!(fallback.due_date.is_none());
    assert!(fallback.category.is_none());
}

#[rstest]
fn due_date_utc_parses_rfc3339() {
    let mut task = parsed("x", 0.9);
    task.due_date = Some("2026-03-06T00:00:00Z".to_owned());

    let due = task.due_date_utc().expect("valid timestamp parses");
    assert_eq!(due.to_rfc3339(), "2026-03-06T00:00:00+00:00");
}

#[rstest]
#[case("next friday")]
#[case("2026-03-06")]
#[case("")]
fn due_date_utc_treats_unparseable_values_as_absent(#[case] value: &str) {
    let mut task = parsed("x", 0.9);
    task.due_date = Some(value.to_owned());
    assert!(task.due_date_utc().is_none());
}

#[rstest]
fn to_draft_falls_back_to_raw_text_for_blank_content() {
    let task = parsed("   ", 0.9);
    let draft = task.to_draft("Buy groceries");
    // The draft content is only observable through task construction.
    let built = crate::task::domain::Task::new(
        crate::task::domain::OwnerId::new(),
        draft,
        &mockable::DefaultClock,
    )
    .expect("raw text keeps the draft valid");
    assert_eq!(built.content(), "Buy groceries");
}

// ============================================================================
// Lenient boundary
// ============================================================================

/// Extractor double that never answers.
struct StalledExtractor;

#[async_trait]
impl TaskExtractor for StalledExtractor {
    async fn extract(&self, _text: &str) -> Result<ParsedTask, ExtractorError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(ExtractorError::Unavailable("unreachable".to_owned()))
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_extractor_passes_successful_extraction_through() {
    let inner = Arc::new(ScriptedExtractor::always(parsed("Call mom", 0.9)));
    let lenient = LenientExtractor::new(inner);

    let result = lenient.extract("call mom please").await;
    assert_eq!(result.content, "Call mom");
    assert_eq!(result.confidence, 0.9);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_extractor_converts_failure_to_fallback() {
    let inner = Arc::new(ScriptedExtractor::with_script([Err(
        ExtractorError::Unavailable("offline".to_owned()),
    )]));
    let lenient = LenientExtractor::new(inner);

    let result = lenient.extract("Buy groceries").await;
    assert_eq!(result, ParsedTask::fallback("Buy groceries"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_extractor_converts_timeout_to_fallback() {
    let lenient =
        LenientExtractor::with_timeout(Arc::new(StalledExtractor), Duration::from_millis(20));

    let result = lenient.extract("Buy groceries").await;
    assert_eq!(result, ParsedTask::fallback("Buy groceries"));
}
