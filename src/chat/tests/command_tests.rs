//! Unit tests for command classification and positional parsing.

use crate::chat::domain::{CommandKind, first_task_number, resolve_by_position};
use crate::task::domain::{OwnerId, Task, TaskDraft};
use mockable::DefaultClock;
use rstest::rstest;

// ============================================================================
// Classification
// ============================================================================

#[rstest]
#[case("list")]
#[case("tasks")]
#[case("show tasks")]
#[case("my tasks")]
#[case("  LIST  ")]
fn list_phrases_classify_as_list(#[case] text: &str) {
    assert_eq!(CommandKind::classify(text), CommandKind::List);
}

#[rstest]
#[case("done 1")]
#[case("complete 3")]
#[case("finish 2")]
#[case("DONE 1")]
fn done_prefixes_classify_as_done(#[case] text: &str) {
    assert_eq!(CommandKind::classify(text), CommandKind::Done);
}

#[rstest]
#[case("cancel 1")]
#[case("delete 2")]
#[case("remove 4")]
fn cancel_prefixes_classify_as_cancel(#[case] text: &str) {
    assert_eq!(CommandKind::classify(text), CommandKind::Cancel);
}

#[rstest]
#[case("help")]
#[case("commands")]
#[case("?")]
#[case(" Help ")]
fn help_phrases_classify_as_help(#[case] text: &str) {
    assert_eq!(CommandKind::classify(text), CommandKind::Help);
}

#[rstest]
#[case("Buy groceries tomorrow")]
#[case("done")]
#[case("cancel")]
#[case("listing the garden chores")]
#[case("")]
fn everything_else_classifies_as_task(#[case] text: &str) {
    assert_eq!(CommandKind::classify(text), CommandKind::Task);
}

#[rstest]
fn done_without_trailing_argument_is_a_task() {
    // A bare verb has no position to act on; treating it as free text keeps
    // the classifier total.
    assert_eq!(CommandKind::classify("finish"), CommandKind::Task);
}

// ============================================================================
// Task-number parsing
// ============================================================================

#[rstest]
#[case("done 3", Some(3))]
#[case("complete task 12 now", Some(12))]
#[case("cancel1", Some(1))]
#[case("done", None)]
#[case("done one", None)]
#[case("done 99999999999999999999999999", None)]
fn first_task_number_finds_first_digit_run(#[case] text: &str, #[case] expected: Option<usize>) {
    assert_eq!(first_task_number(text), expected);
}

// ============================================================================
// Positional resolution
// ============================================================================

fn snapshot(count: usize) -> Vec<Task> {
    (0..count)
        .map(|index| {
            Task::new(
                OwnerId::new(),
                TaskDraft::new(format!("task {index}")),
                &DefaultClock,
            )
            .expect("valid draft")
        })
        .collect()
}

#[rstest]
fn resolve_by_position_is_one_based() {
    let tasks = snapshot(3);
    let resolved = resolve_by_position(&tasks, 1).expect("position in range");
    assert_eq!(resolved.content(), "task 0");
}

#[rstest]
#[case(0)]
#[case(4)]
fn resolve_by_position_rejects_out_of_range(#[case] position: usize) {
    let tasks = snapshot(3);
    assert!(resolve_by_position(&tasks, position).is_none());
}

#[rstest]
fn resolve_by_position_on_empty_snapshot_is_none() {
    assert!(resolve_by_position(&[], 1).is_none());
}
