//! Port for deferred re-categorization of low-confidence captures.

use crate::task::domain::TaskId;

/// Fire-and-forget queue for tasks that deserve a second categorization pass.
///
/// The capture flow schedules a task here when the oracle returned no
/// category or a confidence below its re-categorization threshold. Scheduling
/// must not block or fail the capture; implementations absorb their own
/// errors. The default deployment uses a no-op implementation, but the
/// contract stays explicit so callers can be tested for invoking it.
pub trait RecategorizeQueue: Send + Sync {
    /// Queues a task for deferred re-categorization.
    fn schedule(&self, task_id: TaskId, original_text: &str);
}
