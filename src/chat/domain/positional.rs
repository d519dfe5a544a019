//! Positional addressing over an ordered pending-task snapshot.

use crate::task::domain::Task;

/// Resolves a 1-based position within an ordered snapshot of pending tasks.
///
/// The position is the short-lived handle users see in the task listing. It
/// addresses a row of the snapshot, not a stable record id: another message
/// can mutate the task set between the query and the reference, in which case
/// the position silently points at a different task. That race is accepted
/// for this domain (low concurrency per owner) and is confined to this one
/// call site so it stays visible.
///
/// Returns `None` when the position is zero or past the end of the snapshot.
#[must_use]
pub fn resolve_by_position(snapshot: &[Task], position: usize) -> Option<&Task> {
    position.checked_sub(1).and_then(|index| snapshot.get(index))
}
