//! `PostgreSQL` repository implementation for status storage.

use super::{
    models::{NewStatusRow, StatusRow},
    schema::status,
};
use crate::status::{
    domain::{Status, StatusId, StatusName},
    ports::{StatusRepository, StatusRepositoryError, StatusRepositoryResult},
};
use crate::storage::PgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed status repository.
#[derive(Debug, Clone)]
pub struct PostgresStatusRepository {
    pool: PgPool,
}

impl PostgresStatusRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> StatusRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StatusRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StatusRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StatusRepositoryError::persistence)?
    }
}

#[async_trait]
impl StatusRepository for PostgresStatusRepository {
    async fn insert(&self, name: &StatusName) -> StatusRepositoryResult<Status> {
        let new_row = NewStatusRow {
            name: name.as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = connection
                .transaction(|conn| {
                    diesel::insert_into(status::table)
                        .values(&new_row)
                        .returning(StatusRow::as_returning())
                        .get_result::<StatusRow>(conn)
                })
                .map_err(StatusRepositoryError::persistence)?;
            row_to_status(row)
        })
        .await
    }

    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<Status>> {
        self.run_blocking(move |connection| {
            let row = status::table
                .find(id.value())
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(StatusRepositoryError::persistence)?;
            row.map(row_to_status).transpose()
        })
        .await
    }

    async fn list(&self) -> StatusRepositoryResult<Vec<Status>> {
        self.run_blocking(|connection| {
            status::table
                .order(status::id.asc())
                .select(StatusRow::as_select())
                .load::<StatusRow>(connection)
                .map_err(StatusRepositoryError::persistence)?
                .into_iter()
                .map(row_to_status)
                .collect()
        })
        .await
    }

    async fn update(&self, updated: &Status) -> StatusRepositoryResult<()> {
        let id = updated.id();
        let name = updated.name().as_str().to_owned();

        self.run_blocking(move |connection| {
            let affected = connection
                .transaction(|conn| {
                    diesel::update(status::table.find(id.value()))
                        .set(status::name.eq(name))
                        .execute(conn)
                })
                .map_err(StatusRepositoryError::persistence)?;
            if affected == 0 {
                return Err(StatusRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: StatusId) -> StatusRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = connection
                .transaction(|conn| diesel::delete(status::table.find(id.value())).execute(conn))
                .map_err(StatusRepositoryError::persistence)?;
            if affected == 0 {
                return Err(StatusRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_status(row: StatusRow) -> StatusRepositoryResult<Status> {
    let StatusRow { id, name: raw_name } = row;
    let name = StatusName::new(raw_name).map_err(StatusRepositoryError::persistence)?;
    Ok(Status::new(StatusId::new(id), name))
}
