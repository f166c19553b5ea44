//! Translation of service failures into HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::status::services::StatusServiceError;
use crate::task::{domain::TaskDomainError, services::TaskServiceError};

const INTERNAL_DETAIL: &str = "Internal Database Error";

/// Failure returned by a handler, rendered as `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl ApiError {
    /// Creates an error with an explicit status code.
    #[must_use]
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    fn not_found(detail: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Logs the underlying failure and hides it from the client.
    fn internal(source: &dyn std::error::Error) -> Self {
        tracing::error!(error = %source, "Database Error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: &self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<StatusServiceError> for ApiError {
    fn from(err: StatusServiceError) -> Self {
        match err {
            StatusServiceError::StatusNotFound(_) => Self::not_found("Status not found"),
            StatusServiceError::Domain(domain) => Self::unprocessable(domain.to_string()),
            StatusServiceError::Repository(repository) => Self::internal(&repository),
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::MalformedTaskId(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Malformed task UUID")
            }
            other @ (TaskDomainError::NameTooLong { .. } | TaskDomainError::TextTooLong { .. }) => {
                Self::unprocessable(other.to_string())
            }
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::TaskNotFound(_) => Self::not_found("Task not found"),
            TaskServiceError::StatusNotFound(_) => Self::not_found("Status not found"),
            TaskServiceError::CreationFailed(cause) => {
                tracing::warn!(error = %cause, "task insert rejected by storage");
                Self::new(StatusCode::BAD_REQUEST, "Error while creating task")
            }
            TaskServiceError::Domain(domain) => domain.into(),
            TaskServiceError::TaskRepository(repository) => Self::internal(&repository),
            TaskServiceError::StatusRepository(repository) => Self::internal(&repository),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}
