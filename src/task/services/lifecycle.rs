//! Service layer for task creation, retrieval, modification, and deletion.

use crate::status::{
    domain::{StatusId, StatusName},
    ports::{StatusRepository, StatusRepositoryError},
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskName, TaskText, TaskView},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    text: String,
    status_id: StatusId,
}

impl CreateTaskRequest {
    /// Creates a request with every required task field.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>, status_id: StatusId) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            status_id,
        }
    }
}

/// Request payload for modifying a task.
///
/// Every field is optional. A field is applied only when it is present and
/// non-empty (non-zero for the status); otherwise the stored value is kept.
/// Absent and explicitly empty values are deliberately indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    name: Option<String>,
    text: Option<String>,
    status_id: Option<StatusId>,
}

impl UpdateTaskRequest {
    /// Creates a request that leaves the task unchanged.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            name: None,
            text: None,
            status_id: None,
        }
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status_id: StatusId) -> Self {
        self.status_id = Some(status_id);
        self
    }

    /// Sets every optional field at once, as received from a client.
    #[must_use]
    pub fn with_fields(
        mut self,
        name: Option<String>,
        text: Option<String>,
        status_id: Option<StatusId>,
    ) -> Self {
        self.name = name;
        self.text = text;
        self.status_id = status_id;
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The referenced status does not exist.
    #[error("status not found: {0}")]
    StatusNotFound(StatusId),
    /// The store failed while writing a new task.
    #[error("task creation failed: {0}")]
    CreationFailed(#[source] TaskRepositoryError),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    TaskRepository(TaskRepositoryError),
    /// Status repository operation failed.
    #[error(transparent)]
    StatusRepository(StatusRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::TaskRepository(other),
        }
    }
}

impl From<StatusRepositoryError> for TaskServiceError {
    fn from(err: StatusRepositoryError) -> Self {
        match err {
            StatusRepositoryError::NotFound(id) => Self::StatusNotFound(id),
            other @ StatusRepositoryError::Persistence(_) => Self::StatusRepository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<T, S>
where
    T: TaskRepository + ?Sized,
    S: StatusRepository + ?Sized,
{
    tasks: Arc<T>,
    statuses: Arc<S>,
}

impl<T, S> Clone for TaskService<T, S>
where
    T: TaskRepository + ?Sized,
    S: StatusRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            statuses: Arc::clone(&self.statuses),
        }
    }
}

impl<T, S> TaskService<T, S>
where
    T: TaskRepository + ?Sized,
    S: StatusRepository + ?Sized,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, statuses: Arc<S>) -> Self {
        Self { tasks, statuses }
    }

    /// Creates a task on an existing status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::StatusNotFound`] when the status does not
    /// exist, [`TaskServiceError::Domain`] when a field is too long, or
    /// [`TaskServiceError::CreationFailed`] when the store rejects the write.
    /// Nothing is written in the first two cases.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            name,
            text,
            status_id,
        } = request;
        self.resolve_status(status_id).await?;

        let task = Task::new(TaskName::new(name)?, TaskText::new(text)?, status_id);
        self.tasks
            .insert(&task)
            .await
            .map_err(TaskServiceError::CreationFailed)?;

        tracing::debug!(task_id = %task.id(), status_id = %status_id, "task created");
        Ok(task)
    }

    /// Returns the task with its status name resolved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task matches or
    /// [`TaskServiceError::StatusNotFound`] when the task's status has been
    /// deleted since the task was written.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<TaskView> {
        let task = self.find_task(id).await?;
        self.denormalize(task).await
    }

    /// Returns every task with its status name resolved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::StatusNotFound`] as soon as one task
    /// references a missing status; the partial listing is discarded.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.tasks.list().await?;
        let mut views = Vec::with_capacity(tasks.len());
        for task in tasks {
            views.push(self.denormalize(task).await?);
        }
        Ok(views)
    }

    /// Applies the non-empty fields of the request to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task matches,
    /// [`TaskServiceError::StatusNotFound`] when a new status is given but
    /// does not exist, or [`TaskServiceError::Domain`] when a field is too
    /// long.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskServiceResult<()> {
        let UpdateTaskRequest {
            id,
            name,
            text,
            status_id,
        } = request;
        let mut task = self.find_task(id).await?;

        let new_status = status_id.filter(|status| status.value() != 0);
        if let Some(status) = new_status {
            self.resolve_status(status).await?;
        }

        if let Some(replacement) = non_empty(name) {
            task.rename(TaskName::new(replacement)?);
        }
        if let Some(replacement) = non_empty(text) {
            task.rewrite(TaskText::new(replacement)?);
        }
        if let Some(status) = new_status {
            task.move_to_status(status);
        }

        self.tasks.update(&task).await?;
        tracing::debug!(task_id = %id, "task updated");
        Ok(())
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task matches.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.tasks.delete(id).await?;
        tracing::debug!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn find_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    async fn resolve_status(&self, id: StatusId) -> TaskServiceResult<StatusName> {
        self.statuses
            .find_by_id(id)
            .await?
            .map(|status| status.name().clone())
            .ok_or(TaskServiceError::StatusNotFound(id))
    }

    async fn denormalize(&self, task: Task) -> TaskServiceResult<TaskView> {
        let status_name = self.resolve_status(task.status_id()).await?;
        Ok(task.into_view(&status_name))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.is_empty())
}
