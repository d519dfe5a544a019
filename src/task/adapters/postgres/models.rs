//! Diesel row models for task and owner persistence.

use super::schema::{tasks, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Optional short title.
    pub title: Option<String>,
    /// Task content.
    pub content: String,
    /// Optional one-line summary.
    pub summary: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Urgency level.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional category.
    pub category: Option<String>,
    /// Triage flag.
    pub is_flagged: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Optional short title.
    pub title: Option<String>,
    /// Task content.
    pub content: String,
    /// Optional one-line summary.
    pub summary: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Urgency level.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional category.
    pub category: Option<String>,
    /// Triage flag.
    pub is_flagged: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for owner records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OwnerRow {
    /// Owner identifier.
    pub id: uuid::Uuid,
    /// Normalized phone number.
    pub phone_number: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for owner records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewOwnerRow {
    /// Owner identifier.
    pub id: uuid::Uuid,
    /// Normalized phone number.
    pub phone_number: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
