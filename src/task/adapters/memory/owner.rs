//! Thread-safe in-memory owner repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Owner, OwnerId, PhoneNumber},
    ports::{OwnerRepository, OwnerRepositoryError, OwnerRepositoryResult},
};

/// Thread-safe in-memory owner repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOwnerRepository {
    state: Arc<RwLock<InMemoryOwnerState>>,
}

#[derive(Debug, Default)]
struct InMemoryOwnerState {
    owners: HashMap<OwnerId, Owner>,
    phone_index: HashMap<String, OwnerId>,
}

impl InMemoryOwnerRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn store(&self, owner: &Owner) -> OwnerRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            OwnerRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.owners.contains_key(&owner.id()) {
            return Err(OwnerRepositoryError::DuplicateOwner(owner.id()));
        }
        let phone_key = owner.phone_number().as_str().to_owned();
        if state.phone_index.contains_key(&phone_key) {
            return Err(OwnerRepositoryError::DuplicatePhoneNumber(
                owner.phone_number().clone(),
            ));
        }
        state.phone_index.insert(phone_key, owner.id());
        state.owners.insert(owner.id(), owner.clone());
        Ok(())
    }

    async fn find_by_phone(&self, phone: &PhoneNumber) -> OwnerRepositoryResult<Option<Owner>> {
        let state = self.state.read().map_err(|err| {
            OwnerRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let owner = state
            .phone_index
            .get(phone.as_str())
            .and_then(|owner_id| state.owners.get(owner_id))
            .cloned();
        Ok(owner)
    }
}
