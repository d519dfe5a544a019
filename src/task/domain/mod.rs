//! Pure domain types for tasks and their owners.

mod error;
mod ids;
mod owner;
mod task;

pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{OwnerId, PhoneNumber, TaskId};
pub use owner::{Owner, PersistedOwnerData};
pub use task::{PersistedTaskData, Priority, Task, TaskDraft, TaskStatus};
