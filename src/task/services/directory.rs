//! Owner lookup and creation keyed by normalized phone number.

use crate::task::{
    domain::{Owner, PhoneNumber},
    ports::{OwnerRepository, OwnerRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by the owner directory.
#[derive(Debug, Error)]
pub enum OwnerDirectoryError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] OwnerRepositoryError),
}

/// Find-or-create service for task owners.
///
/// Each inbound message resolves its owner exactly once through this service;
/// the normalized phone number is the uniqueness key.
#[derive(Clone)]
pub struct OwnerDirectory<R, C>
where
    R: OwnerRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> OwnerDirectory<R, C>
where
    R: OwnerRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new owner directory.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the owner for a normalized phone number, creating one if
    /// missing.
    ///
    /// Two concurrent messages from a new sender may race on the insert; the
    /// loser re-reads the winner's record, so both resolve to the same owner.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerDirectoryError::Repository`] when persistence fails.
    pub async fn find_or_create(
        &self,
        phone: &PhoneNumber,
    ) -> Result<Owner, OwnerDirectoryError> {
        if let Some(existing) = self.repository.find_by_phone(phone).await? {
            return Ok(existing);
        }

        let owner = Owner::new(phone.clone(), &*self.clock);
        match self.repository.store(&owner).await {
            Ok(()) => Ok(owner),
            Err(OwnerRepositoryError::DuplicatePhoneNumber(_)) => {
                let winner = self.repository.find_by_phone(phone).await?;
                winner.ok_or_else(|| {
                    OwnerDirectoryError::Repository(OwnerRepositoryError::DuplicatePhoneNumber(
                        phone.clone(),
                    ))
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
