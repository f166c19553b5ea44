//! Port contracts for the status catalogue.
//!
//! Ports define infrastructure-agnostic interfaces used by status and task
//! services.

pub mod repository;

pub use repository::{StatusRepository, StatusRepositoryError, StatusRepositoryResult};
