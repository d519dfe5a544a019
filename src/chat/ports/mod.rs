//! Port contracts for the chat boundary.

mod channel;
mod extractor;
mod recategorize;

pub use channel::{ChannelError, ChatChannel};
pub use extractor::{ExtractorError, TaskExtractor};
pub use recategorize::RecategorizeQueue;
