//! Orchestration services acting on persisted tasks and owners.

mod categorize;
mod directory;

pub use categorize::{CategorizeError, CategorizeService};
pub use directory::{OwnerDirectory, OwnerDirectoryError};
