//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasktrack::status::{
    adapters::memory::InMemoryStatusRepository, domain::StatusId, services::StatusService,
};
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    services::{TaskService, TaskServiceError},
};

/// Scenario world for task tracking behaviour tests.
pub struct TaskTrackingWorld {
    pub statuses: StatusService<InMemoryStatusRepository>,
    pub tasks: TaskService<InMemoryTaskRepository, InMemoryStatusRepository>,
    pub last_status: Option<StatusId>,
    pub last_task: Option<TaskId>,
    pub last_result: Option<Result<(), TaskServiceError>>,
}

impl TaskTrackingWorld {
    /// Creates a world over empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let statuses = Arc::new(InMemoryStatusRepository::new());
        Self {
            statuses: StatusService::new(Arc::clone(&statuses)),
            tasks: TaskService::new(Arc::new(InMemoryTaskRepository::new()), statuses),
            last_status: None,
            last_task: None,
            last_result: None,
        }
    }

    /// Returns the most recently created status.
    ///
    /// # Errors
    ///
    /// Returns an error if no status has been created in the scenario.
    pub fn current_status(&self) -> Result<StatusId, eyre::Report> {
        self.last_status
            .ok_or_else(|| eyre::eyre!("missing status in scenario world"))
    }

    /// Returns the most recently created task.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has been created in the scenario.
    pub fn current_task(&self) -> Result<TaskId, eyre::Report> {
        self.last_task
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskTrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTrackingWorld {
    TaskTrackingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
