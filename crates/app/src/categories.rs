use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskmaster_core::{types::Category, CategoryRepository};
use tracing::info;

use crate::error::ApiError;
use crate::router::{decode, AppState};
use crate::telemetry;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let outcome = state.categories().get_categories();
    telemetry::record_request("categories.list", outcome.is_ok());
    Ok(Json(outcome?))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let outcome = state.categories().get_category(&id);
    telemetry::record_request("categories.fetch", outcome.is_ok());
    Ok(Json(outcome?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let outcome = decode::<Category>(&body).and_then(|category| {
        state
            .categories()
            .create_category(category)
            .map_err(ApiError::from)
    });
    telemetry::record_request("categories.create", outcome.is_ok());
    let category = outcome?;

    info!(stage = "api", id = %category.id, name = %category.name, "category stored");
    telemetry::record_store_size("category", state.categories().repository().count());
    Ok((StatusCode::CREATED, Json(category)))
}

/// Deletes the category. Todos that reference it keep the dangling id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let outcome = state.categories().delete_category(&id);
    telemetry::record_request("categories.delete", outcome.is_ok());
    outcome?;

    info!(stage = "api", %id, "category deleted");
    telemetry::record_store_size("category", state.categories().repository().count());
    Ok(StatusCode::OK)
}
