use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskmaster_core::{types::Todo, TodoRepository};
use tracing::info;

use crate::error::ApiError;
use crate::router::{decode, AppState};
use crate::telemetry;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let outcome = state.todos().get_todos();
    telemetry::record_request("todos.list", outcome.is_ok());
    Ok(Json(outcome?))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let outcome = state.todos().get_todo(&id);
    telemetry::record_request("todos.fetch", outcome.is_ok());
    Ok(Json(outcome?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let outcome = decode::<Todo>(&body)
        .and_then(|todo| state.todos().create_todo(todo).map_err(ApiError::from));
    telemetry::record_request("todos.create", outcome.is_ok());
    let todo = outcome?;

    info!(stage = "api", id = %todo.id, status = %todo.status, priority = %todo.priority, "todo stored");
    telemetry::record_store_size("todo", state.todos().repository().count());
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let outcome = decode::<Todo>(&body)
        .and_then(|todo| state.todos().update_todo(&id, todo).map_err(ApiError::from));
    telemetry::record_request("todos.update", outcome.is_ok());
    outcome?;

    info!(stage = "api", %id, "todo updated");
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let outcome = state.todos().delete_todo(&id);
    telemetry::record_request("todos.delete", outcome.is_ok());
    outcome?;

    info!(stage = "api", %id, "todo deleted");
    telemetry::record_store_size("todo", state.todos().repository().count());
    Ok(StatusCode::OK)
}
