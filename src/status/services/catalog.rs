//! Service layer for status creation, lookup, renaming, and deletion.

use crate::status::{
    domain::{Status, StatusDomainError, StatusId, StatusName},
    ports::{StatusRepository, StatusRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for renaming a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    id: StatusId,
    name: Option<String>,
}

impl UpdateStatusRequest {
    /// Creates a request that leaves the status unchanged.
    #[must_use]
    pub const fn new(id: StatusId) -> Self {
        Self { id, name: None }
    }

    /// Sets the replacement name. An empty name keeps the stored one.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement name from an optional value.
    #[must_use]
    pub fn with_optional_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

/// Service-level errors for status operations.
#[derive(Debug, Error)]
pub enum StatusServiceError {
    /// No status exists with the identifier.
    #[error("status not found: {0}")]
    StatusNotFound(StatusId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StatusDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(StatusRepositoryError),
}

impl From<StatusRepositoryError> for StatusServiceError {
    fn from(err: StatusRepositoryError) -> Self {
        match err {
            StatusRepositoryError::NotFound(id) => Self::StatusNotFound(id),
            other @ StatusRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for status service operations.
pub type StatusServiceResult<T> = Result<T, StatusServiceError>;

/// Status catalogue service.
pub struct StatusService<R>
where
    R: StatusRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for StatusService<R>
where
    R: StatusRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> StatusService<R>
where
    R: StatusRepository + ?Sized,
{
    /// Creates a new status service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a status. Duplicate names are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StatusServiceError::Domain`] when the name is too long or
    /// [`StatusServiceError::Repository`] when the store rejects the write.
    pub async fn create(&self, name: impl Into<String>) -> StatusServiceResult<Status> {
        let status_name = StatusName::new(name)?;
        let status = self.repository.insert(&status_name).await?;
        tracing::debug!(status_id = %status.id(), "status created");
        Ok(status)
    }

    /// Returns the status with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StatusServiceError::StatusNotFound`] when no status matches.
    pub async fn get_by_id(&self, id: StatusId) -> StatusServiceResult<Status> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(StatusServiceError::StatusNotFound(id))
    }

    /// Returns every status in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StatusServiceError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> StatusServiceResult<Vec<Status>> {
        Ok(self.repository.list().await?)
    }

    /// Renames a status when the request carries a non-empty name.
    ///
    /// # Errors
    ///
    /// Returns [`StatusServiceError::StatusNotFound`] when no status matches
    /// or [`StatusServiceError::Domain`] when the new name is too long.
    pub async fn update(&self, request: UpdateStatusRequest) -> StatusServiceResult<()> {
        let UpdateStatusRequest { id, name } = request;
        let mut status = self.get_by_id(id).await?;

        if let Some(replacement) = name.filter(|value| !value.is_empty()) {
            status.rename(StatusName::new(replacement)?);
        }

        self.repository.update(&status).await?;
        tracing::debug!(status_id = %id, "status updated");
        Ok(())
    }

    /// Deletes a status. Tasks that reference it are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`StatusServiceError::StatusNotFound`] when no status matches.
    pub async fn delete(&self, id: StatusId) -> StatusServiceResult<()> {
        self.repository.delete(id).await?;
        tracing::debug!(status_id = %id, "status deleted");
        Ok(())
    }
}
