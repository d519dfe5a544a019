//! `PostgreSQL` adapters for task and owner persistence.

mod models;
mod owners;
mod repository;
mod schema;

pub use owners::PostgresOwnerRepository;
pub use repository::{PostgresTaskStore, TaskPgPool};

#[cfg(test)]
pub(crate) use models::TaskRow;
#[cfg(test)]
pub(crate) use repository::{row_to_task, task_to_new_row};
