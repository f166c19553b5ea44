//! Diesel row models for status persistence.

use super::schema::status;
use diesel::prelude::*;

/// Query result row for status records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = status)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StatusRow {
    /// Store-generated status identifier.
    pub id: i32,
    /// Human-readable status label.
    pub name: String,
}

/// Insert model for status records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = status)]
pub struct NewStatusRow {
    /// Human-readable status label.
    pub name: String,
}
