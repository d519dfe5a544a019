//! Port contracts for task persistence and triage oracles.

mod categorizer;
mod repository;

pub use categorizer::{Categorizer, CategorizerError};
pub use repository::{
    OwnerRepository, OwnerRepositoryError, OwnerRepositoryResult, TaskStore, TaskStoreError,
    TaskStoreResult,
};
