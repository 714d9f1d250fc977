use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use taskmaster_core::{CategoryService, TodoService};
use taskmaster_storage::{CategoryStore, MemoryStore, TodoStore};

use crate::error::ApiError;
use crate::{categories, telemetry, todos};

#[derive(Clone)]
pub struct AppState {
    metrics: PrometheusHandle,
    todos: Arc<TodoService<TodoStore>>,
    categories: Arc<CategoryService<CategoryStore>>,
}

impl AppState {
    pub fn new(metrics: PrometheusHandle, store: MemoryStore) -> Self {
        Self {
            metrics,
            todos: Arc::new(TodoService::new(store.todos())),
            categories: Arc::new(CategoryService::new(store.categories())),
        }
    }

    pub fn metrics(&self) -> &PrometheusHandle {
        &self.metrics
    }

    pub fn todos(&self) -> &TodoService<TodoStore> {
        &self.todos
    }

    pub fn categories(&self) -> &CategoryService<CategoryStore> {
        &self.categories
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .route("/todos", get(todos::list).post(todos::create))
        .route(
            "/todos/:id",
            get(todos::fetch).put(todos::update).delete(todos::remove),
        )
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/categories/:id",
            get(categories::fetch).delete(categories::remove),
        )
        // A bare trailing slash addresses the empty id.
        .route(
            "/todos/",
            put(|state: State<AppState>, body: Bytes| {
                todos::update(state, Path(String::new()), body)
            })
            .delete(|state: State<AppState>| todos::remove(state, Path(String::new()))),
        )
        .route(
            "/categories/",
            delete(|state: State<AppState>| categories::remove(state, Path(String::new()))),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin may call the API. Preflight `OPTIONS` requests are answered by
/// the layer itself with an empty 200.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// Decodes a JSON request body without looking at `Content-Type`.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = telemetry::render_metrics(state.metrics());
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}
