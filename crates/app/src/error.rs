use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use taskmaster_core::RepositoryError;
use thiserror::Error;
use tracing::{error, warn};

/// Failure returned by an API handler.
///
/// Rendered as a plain-text body carrying the error message. Every repository
/// failure maps to 500, including a missing id on update.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        let missing_record = matches!(&self, Self::Repository(err) if err.is_not_found());
        if status.is_server_error() {
            error!(
                stage = "api",
                status = status.as_u16(),
                missing_record,
                error = %message,
                "request failed"
            );
        } else {
            warn!(stage = "api", status = status.as_u16(), error = %message, "request rejected");
        }

        let mut response = (status, format!("{message}\n")).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}
