//! Pure domain logic for message interpretation.

mod command;
mod dispatch;
mod parsed_task;
mod positional;

pub use command::{CommandKind, first_task_number};
pub use dispatch::DispatchResult;
pub use parsed_task::{FALLBACK_CONFIDENCE, ParsedTask};
pub use positional::resolve_by_position;
