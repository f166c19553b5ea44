//! Handlers for the `/tasks` routes.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};

use super::{
    AppState,
    dto::{CreateTaskBody, TaskIdQuery, TaskResponse, UpdateTaskBody},
    error::ApiError,
};
use crate::status::domain::StatusId;
use crate::task::{
    domain::TaskId,
    services::{CreateTaskRequest, UpdateTaskRequest},
};

type HandlerResult<T> = Result<T, ApiError>;

pub(super) async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<Value>)> {
    let Json(CreateTaskBody { name, text, status }) = body?;
    state
        .tasks
        .create(CreateTaskRequest::new(name, text, StatusId::new(status)))
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "result": "ok" }))))
}

pub(super) async fn get_task(
    State(state): State<AppState>,
    query: Result<Query<TaskIdQuery>, QueryRejection>,
) -> HandlerResult<Json<TaskResponse>> {
    let Query(TaskIdQuery { task_id }) = query?;
    let id = TaskId::parse(&task_id)?;
    let view = state.tasks.get_by_id(id).await?;
    Ok(Json(view.into()))
}

pub(super) async fn list_tasks(
    State(state): State<AppState>,
) -> HandlerResult<Json<Vec<TaskResponse>>> {
    let views = state.tasks.list_all().await?;
    Ok(Json(views.into_iter().map(TaskResponse::from).collect()))
}

pub(super) async fn update_task(
    State(state): State<AppState>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> HandlerResult<Json<()>> {
    let Json(payload) = body?;
    let id = TaskId::parse(&payload.id)?;
    let status_id = payload.status_id();
    let request =
        UpdateTaskRequest::new(id).with_fields(payload.name, payload.text, status_id);
    state.tasks.update(request).await?;
    Ok(Json(()))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    query: Result<Query<TaskIdQuery>, QueryRejection>,
) -> HandlerResult<Json<()>> {
    let Query(TaskIdQuery { task_id }) = query?;
    state.tasks.delete(TaskId::parse(&task_id)?).await?;
    Ok(Json(()))
}
