//! Diesel row models for task persistence.

use super::schema::task;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub name: String,
    /// Free-text task body.
    pub text: String,
    /// Referenced status identifier.
    pub status_id: i32,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub name: String,
    /// Free-text task body.
    pub text: String,
    /// Referenced status identifier.
    pub status_id: i32,
}

/// Changeset applied when a task is updated.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = task)]
pub struct TaskChangeset {
    /// Task title.
    pub name: String,
    /// Free-text task body.
    pub text: String,
    /// Referenced status identifier.
    pub status_id: i32,
}
