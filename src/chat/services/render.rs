//! User-facing reply rendering.
//!
//! Every reply string the handlers produce is built here, so the exact
//! wording and glyphs live in one place.

use crate::task::domain::{Priority, Task};
use chrono::{DateTime, NaiveDate, Utc};

/// Reply for an empty task listing.
pub const NO_PENDING_TASKS: &str = "📋 You have no pending tasks! \
    Add one by sending a message like \"Buy groceries tomorrow\"";

/// Guidance reply when a message could not be understood as a task.
pub const CREATION_GUIDANCE: &str = "👋 I couldn't quite understand that as a task. \
    Try something like:\n\n\
    • Buy groceries tomorrow\n\
    • Call mom next week\n\
    • Submit report by Friday\n\n\
    Or send 'help' for more commands.";

/// Fixed usage message returned by the help command.
pub const HELP_TEXT: &str = "🤖 Dovecote - Commands\n\n\
    📝 *Add a task:*\n\
    Just send a message describing what you need to do:\n\
    • \"Buy groceries tomorrow\"\n\
    • \"Call mom next week\"\n\
    • \"Submit report by Friday\"\n\n\
    📋 *View tasks:*\n\
    • \"list\" or \"tasks\"\n\n\
    ✅ *Mark as done:*\n\
    • \"done 1\" (marks task #1 as complete)\n\n\
    🗑️ *Cancel a task:*\n\
    • \"cancel 1\" (cancels task #1)\n\
    • \"delete 2\" (cancels task #2)\n\n\
    ❓ *Get help:*\n\
    • \"help\"\n\n\
    💡 Tips:\n\
    - Include dates like \"tomorrow\", \"next week\", \"Friday\"\n\
    - Mention priority: \"urgent\", \"important\"\n\
    - Tasks are automatically organized by due date\n\n\
    Try it now! Send any task you'd like to remember.";

/// Returns the glyph used for a priority in listings.
#[must_use]
pub const fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

/// Renders a relative due label: "Today", "Tomorrow", or a short month/day.
///
/// Calendar-day comparison uses UTC dates; `today` is the caller's current
/// UTC date.
#[must_use]
pub fn due_label(due: DateTime<Utc>, today: NaiveDate) -> String {
    let due_day = due.date_naive();
    if due_day == today {
        return "Today".to_owned();
    }
    if today.succ_opt().is_some_and(|tomorrow| due_day == tomorrow) {
        return "Tomorrow".to_owned();
    }
    due.format("%b %-d").to_string()
}

/// Renders the numbered pending-task listing.
///
/// The 1-based line numbers are the positional handles done/cancel commands
/// accept, so the listing order must match the store's pending query order.
#[must_use]
pub fn task_list(tasks: &[Task], today: NaiveDate) -> String {
    let mut message = format!("📋 Your Tasks ({}):\n\n", tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        let position = index.saturating_add(1);
        message.push_str(&format!(
            "{position}. {} {}",
            priority_marker(task.priority()),
            task.content()
        ));
        if let Some(due) = task.due_date() {
            message.push_str(&format!(" ({})", due_label(due, today)));
        }
        message.push('\n');
    }
    message.push_str("\n💡 Send \"done [number]\" to mark complete");
    message
}

/// Renders the confirmation reply for a freshly created task.
///
/// Echoes the content, adds a due line when a due date is set, and adds a
/// priority line only when the priority is non-default.
#[must_use]
pub fn creation_confirmation(task: &Task) -> String {
    let mut message = format!("✅ Task added: \"{}\"", task.content());
    if let Some(due) = task.due_date() {
        message.push_str(&format!("\n📅 Due: {}", due.format("%a, %b %-d")));
    }
    match task.priority() {
        Priority::Medium => {}
        Priority::High => message.push_str("\n🔴 Priority: high"),
        Priority::Low => message.push_str("\n🟢 Priority: low"),
    }
    message
}

/// Renders the confirmation reply for a completed task.
#[must_use]
pub fn done_confirmation(task: &Task) -> String {
    format!("✅ Marked as done: \"{}\"", task.content())
}

/// Renders the confirmation reply for a cancelled task.
#[must_use]
pub fn cancel_confirmation(task: &Task) -> String {
    format!("🗑️ Cancelled: \"{}\"", task.content())
}

/// Renders the user-error reply for a missing task number.
#[must_use]
pub fn missing_task_number(example: &str) -> String {
    format!("❌ Please specify a task number, e.g., \"{example}\"")
}

/// Renders the user-error reply for an out-of-range task number.
#[must_use]
pub fn task_number_out_of_range(count: usize) -> String {
    format!("❌ Task number must be between 1 and {count}")
}

/// Reply when done/cancel finds no pending tasks at all.
pub const NO_TASKS_TO_ADDRESS: &str = "❌ No pending tasks found";
