//! In-memory repository for statuses.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::status::{
    domain::{Status, StatusId, StatusName},
    ports::{StatusRepository, StatusRepositoryError, StatusRepositoryResult},
};

/// Thread-safe in-memory status repository.
///
/// Identifiers are assigned from a counter starting at 1 and are never
/// reused, mirroring a `SERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusRepository {
    state: Arc<RwLock<InMemoryStatusState>>,
}

#[derive(Debug, Default)]
struct InMemoryStatusState {
    last_id: i32,
    statuses: BTreeMap<StatusId, Status>,
}

impl InMemoryStatusRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn storage_failure(err: impl std::fmt::Display) -> StatusRepositoryError {
    StatusRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn insert(&self, name: &StatusName) -> StatusRepositoryResult<Status> {
        let mut state = self.state.write().map_err(storage_failure)?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| storage_failure("status identifier space exhausted"))?;
        state.last_id = next;

        let status = Status::new(StatusId::new(next), name.clone());
        state.statuses.insert(status.id(), status.clone());
        Ok(status)
    }

    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<Status>> {
        let state = self.state.read().map_err(storage_failure)?;
        Ok(state.statuses.get(&id).cloned())
    }

    async fn list(&self) -> StatusRepositoryResult<Vec<Status>> {
        let state = self.state.read().map_err(storage_failure)?;
        Ok(state.statuses.values().cloned().collect())
    }

    async fn update(&self, status: &Status) -> StatusRepositoryResult<()> {
        let mut state = self.state.write().map_err(storage_failure)?;
        let stored = state
            .statuses
            .get_mut(&status.id())
            .ok_or(StatusRepositoryError::NotFound(status.id()))?;
        stored.clone_from(status);
        Ok(())
    }

    async fn delete(&self, id: StatusId) -> StatusRepositoryResult<()> {
        let mut state = self.state.write().map_err(storage_failure)?;
        state
            .statuses
            .remove(&id)
            .map(drop)
            .ok_or(StatusRepositoryError::NotFound(id))
    }
}
