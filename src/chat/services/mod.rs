//! Orchestration services for message interpretation and dispatch.

mod dispatch;
mod extraction;
pub mod render;

pub use dispatch::{HandlerError, MessageDispatcher, PENDING_TASK_LIMIT};
pub use extraction::{DEFAULT_EXTRACTION_TIMEOUT, LenientExtractor};
