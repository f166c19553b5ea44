//! Repository port for status persistence and lookup.

use crate::status::domain::{Status, StatusId, StatusName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status repository operations.
pub type StatusRepositoryResult<T> = Result<T, StatusRepositoryError>;

/// Status persistence contract.
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Stores a new status and returns it with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn insert(&self, name: &StatusName) -> StatusRepositoryResult<Status>;

    /// Finds a status by identifier.
    ///
    /// Returns `None` when the status does not exist.
    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<Status>>;

    /// Returns every status in ascending identifier order.
    async fn list(&self) -> StatusRepositoryResult<Vec<Status>>;

    /// Persists the name of an existing status.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRepositoryError::NotFound`] when the status does not
    /// exist.
    async fn update(&self, status: &Status) -> StatusRepositoryResult<()>;

    /// Removes a status. Tasks referencing it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRepositoryError::NotFound`] when the status does not
    /// exist.
    async fn delete(&self, id: StatusId) -> StatusRepositoryResult<()>;
}

/// Errors returned by status repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusRepositoryError {
    /// The status was not found.
    #[error("status not found: {0}")]
    NotFound(StatusId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
