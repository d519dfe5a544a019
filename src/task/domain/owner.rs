//! Owner aggregate: the end user a task belongs to.

use super::{OwnerId, PhoneNumber};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task owner, identified by a normalized phone-like identifier.
///
/// Owners are looked up or created exactly once per inbound message; the
/// normalized phone number is unique across owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    id: OwnerId,
    phone_number: PhoneNumber,
    name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOwnerData {
    /// Persisted owner identifier.
    pub id: OwnerId,
    /// Persisted normalized phone number.
    pub phone_number: PhoneNumber,
    /// Persisted display name, if any.
    pub name: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Owner {
    /// Creates a new owner for a normalized phone number.
    #[must_use]
    pub fn new(phone_number: PhoneNumber, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: OwnerId::new(),
            phone_number,
            name: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an owner from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedOwnerData) -> Self {
        Self {
            id: data.id,
            phone_number: data.phone_number,
            name: data.name,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn id(&self) -> OwnerId {
        self.id
    }

    /// Returns the normalized phone number.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
