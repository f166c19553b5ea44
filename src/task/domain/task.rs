//! Task entity and its denormalized read view.

use super::{TaskId, TaskName, TaskText};
use crate::status::domain::{StatusId, StatusName};
use serde::{Deserialize, Serialize};

/// Task entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    text: TaskText,
    status_id: StatusId,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted task text.
    pub text: TaskText,
    /// Persisted status reference, which may no longer resolve.
    pub status_id: StatusId,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn new(name: TaskName, text: TaskText, status_id: StatusId) -> Self {
        Self {
            id: TaskId::new(),
            name,
            text,
            status_id,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            text: data.text,
            status_id: data.status_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task body.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the referenced status identifier.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Replaces the task name.
    pub fn rename(&mut self, name: TaskName) {
        self.name = name;
    }

    /// Replaces the task body.
    pub fn rewrite(&mut self, text: TaskText) {
        self.text = text;
    }

    /// Points the task at another status.
    pub const fn move_to_status(&mut self, status_id: StatusId) {
        self.status_id = status_id;
    }

    /// Builds the read view carrying the resolved status name.
    #[must_use]
    pub fn into_view(self, status_name: &StatusName) -> TaskView {
        TaskView {
            id: self.id,
            name: self.name.into_inner(),
            text: self.text.into_inner(),
            status: status_name.as_str().to_owned(),
        }
    }
}

/// Denormalized task read model.
///
/// Carries the status **name** instead of the raw status identifier so that
/// a client can render the task without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task body.
    pub text: String,
    /// Name of the referenced status.
    pub status: String,
}
