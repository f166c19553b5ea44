//! Handlers for the `/status` routes.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use super::{
    AppState,
    dto::{StatusIdQuery, StatusNameQuery, StatusResponse, UpdateStatusBody},
    error::ApiError,
};
use crate::status::{domain::StatusId, services::UpdateStatusRequest};

type HandlerResult<T> = Result<T, ApiError>;

pub(super) async fn create_status(
    State(state): State<AppState>,
    query: Result<Query<StatusNameQuery>, QueryRejection>,
) -> HandlerResult<(StatusCode, Json<()>)> {
    let Query(StatusNameQuery { status_name }) = query?;
    state.statuses.create(status_name).await?;
    Ok((StatusCode::CREATED, Json(())))
}

pub(super) async fn get_status(
    State(state): State<AppState>,
    query: Result<Query<StatusIdQuery>, QueryRejection>,
) -> HandlerResult<Json<StatusResponse>> {
    let Query(StatusIdQuery { status_id }) = query?;
    let status = state.statuses.get_by_id(StatusId::new(status_id)).await?;
    Ok(Json(status.into()))
}

pub(super) async fn list_statuses(
    State(state): State<AppState>,
) -> HandlerResult<Json<Vec<StatusResponse>>> {
    let statuses = state.statuses.list_all().await?;
    Ok(Json(statuses.into_iter().map(StatusResponse::from).collect()))
}

pub(super) async fn update_status(
    State(state): State<AppState>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> HandlerResult<Json<()>> {
    let Json(UpdateStatusBody { id, name }) = body?;
    state
        .statuses
        .update(UpdateStatusRequest::new(StatusId::new(id)).with_optional_name(name))
        .await?;
    Ok(Json(()))
}

pub(super) async fn delete_status(
    State(state): State<AppState>,
    query: Result<Query<StatusIdQuery>, QueryRejection>,
) -> HandlerResult<Json<()>> {
    let Query(StatusIdQuery { status_id }) = query?;
    state.statuses.delete(StatusId::new(status_id)).await?;
    Ok(Json(()))
}
