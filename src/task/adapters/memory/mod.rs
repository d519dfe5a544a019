//! In-memory repositories for tests and single-process deployments.

mod owner;
mod task;

pub use owner::InMemoryOwnerRepository;
pub use task::InMemoryTaskStore;
