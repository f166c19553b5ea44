//! `PostgreSQL` adapters for status persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresStatusRepository;
