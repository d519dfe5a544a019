//! `PostgreSQL` owner repository implementation.

use super::{
    models::{NewOwnerRow, OwnerRow},
    repository::TaskPgPool,
    schema::users,
};
use crate::task::{
    domain::{Owner, OwnerId, PersistedOwnerData, PhoneNumber},
    ports::{OwnerRepository, OwnerRepositoryError, OwnerRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed owner repository.
#[derive(Debug, Clone)]
pub struct PostgresOwnerRepository {
    pool: TaskPgPool,
}

impl PostgresOwnerRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> OwnerRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> OwnerRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(OwnerRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(OwnerRepositoryError::persistence)?
    }
}

#[async_trait]
impl OwnerRepository for PostgresOwnerRepository {
    async fn store(&self, owner: &Owner) -> OwnerRepositoryResult<()> {
        let owner_id = owner.id();
        let phone = owner.phone_number().clone();
        let new_row = to_new_row(owner);

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if info.constraint_name() == Some("users_phone_number_key") =>
                    {
                        OwnerRepositoryError::DuplicatePhoneNumber(phone.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        OwnerRepositoryError::DuplicateOwner(owner_id)
                    }
                    _ => OwnerRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_phone(&self, phone: &PhoneNumber) -> OwnerRepositoryResult<Option<Owner>> {
        let phone_key = phone.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::phone_number.eq(&phone_key))
                .select(OwnerRow::as_select())
                .first::<OwnerRow>(connection)
                .optional()
                .map_err(OwnerRepositoryError::persistence)?;
            row.map(row_to_owner).transpose()
        })
        .await
    }
}

fn to_new_row(owner: &Owner) -> NewOwnerRow {
    NewOwnerRow {
        id: owner.id().into_inner(),
        phone_number: owner.phone_number().as_str().to_owned(),
        name: owner.name().map(ToOwned::to_owned),
        created_at: owner.created_at(),
        updated_at: owner.updated_at(),
    }
}

fn row_to_owner(row: OwnerRow) -> OwnerRepositoryResult<Owner> {
    let OwnerRow {
        id,
        phone_number,
        name,
        created_at,
        updated_at,
    } = row;

    let phone =
        PhoneNumber::normalize(&phone_number).map_err(OwnerRepositoryError::persistence)?;
    Ok(Owner::from_persisted(PersistedOwnerData {
        id: OwnerId::from_uuid(id),
        phone_number: phone,
        name,
        created_at,
        updated_at,
    }))
}
