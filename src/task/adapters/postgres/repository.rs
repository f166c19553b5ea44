//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::task,
};
use crate::status::domain::StatusId;
use crate::storage::PgPool;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskName, TaskText},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, new_task: &Task) -> TaskRepositoryResult<()> {
        let task_id = new_task.id();
        let new_row = to_new_row(new_task);

        self.run_blocking(move |connection| {
            connection
                .transaction(|conn| {
                    diesel::insert_into(task::table)
                        .values(&new_row)
                        .execute(conn)
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = task::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            task::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn update(&self, updated: &Task) -> TaskRepositoryResult<()> {
        let id = updated.id();
        let changeset = TaskChangeset {
            name: updated.name().as_str().to_owned(),
            text: updated.text().as_str().to_owned(),
            status_id: updated.status_id().value(),
        };

        self.run_blocking(move |connection| {
            let affected = connection
                .transaction(|conn| {
                    diesel::update(task::table.find(id.into_inner()))
                        .set(&changeset)
                        .execute(conn)
                })
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = connection
                .transaction(|conn| diesel::delete(task::table.find(id.into_inner())).execute(conn))
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(new_task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: new_task.id().into_inner(),
        name: new_task.name().as_str().to_owned(),
        text: new_task.text().as_str().to_owned(),
        status_id: new_task.status_id().value(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        name: persisted_name,
        text: persisted_text,
        status_id,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        name: TaskName::new(persisted_name).map_err(TaskRepositoryError::persistence)?,
        text: TaskText::new(persisted_text).map_err(TaskRepositoryError::persistence)?,
        status_id: StatusId::new(status_id),
    };
    Ok(Task::from_persisted(data))
}
