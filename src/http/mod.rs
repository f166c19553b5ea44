//! JSON-over-HTTP transport.
//!
//! Handlers parse query strings and bodies into typed inputs, call one
//! service operation, and translate service failures into status codes
//! through [`ApiError`]. Routes:
//!
//! - `PUT /status/create`, `GET /status/get`, `GET /status/get_all_statuses`,
//!   `PATCH /status/update`, `DELETE /status/delete`
//! - `PUT /tasks/create`, `GET /tasks/get`, `GET /tasks/get_list`,
//!   `PATCH /tasks/update`, `DELETE /tasks/delete`
//! - `GET /health`

mod dto;
mod error;
mod health;
mod status;
mod tasks;

pub use dto::{
    CreateTaskBody, StatusIdQuery, StatusNameQuery, StatusResponse, TaskIdQuery, TaskResponse,
    UpdateStatusBody, UpdateTaskBody,
};
pub use error::ApiError;

use axum::{
    Router,
    routing::{delete, get, patch, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::status::{ports::StatusRepository, services::StatusService};
use crate::storage::Repositories;
use crate::task::{ports::TaskRepository, services::TaskService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Status catalogue operations.
    pub statuses: StatusService<dyn StatusRepository>,
    /// Task operations.
    pub tasks: TaskService<dyn TaskRepository, dyn StatusRepository>,
}

impl AppState {
    /// Wires the services over the given repositories.
    #[must_use]
    pub fn from_repositories(repositories: Repositories) -> Self {
        let Repositories { statuses, tasks } = repositories;
        Self {
            statuses: StatusService::new(std::sync::Arc::clone(&statuses)),
            tasks: TaskService::new(tasks, statuses),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

/// Builds the application router with request tracing.
#[must_use]
pub fn router(state: AppState) -> Router {
    let status_routes = Router::new()
        .route("/create", put(status::create_status))
        .route("/get", get(status::get_status))
        .route("/get_all_statuses", get(status::list_statuses))
        .route("/update", patch(status::update_status))
        .route("/delete", delete(status::delete_status));

    let task_routes = Router::new()
        .route("/create", put(tasks::create_task))
        .route("/get", get(tasks::get_task))
        .route("/get_list", get(tasks::list_tasks))
        .route("/update", patch(tasks::update_task))
        .route("/delete", delete(tasks::delete_task));

    Router::new()
        .route("/health", get(health::health))
        .nest("/status", status_routes)
        .nest("/tasks", task_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[cfg(test)]
mod tests;
