use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use todo_core::error::CoreError;
use todo_core::validation::FieldError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]; this is the only place errors become HTTP
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be read as the expected JSON shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::InvalidFields(errors)) => bad_request(errors),
            AppError::MalformedBody(rejection) => {
                bad_request(vec![FieldError::new("body", rejection.body_text())])
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        }
    }
}

fn bad_request(errors: Vec<FieldError>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { errors })).into_response()
}

/// Generic 500. The cause is logged by the caller and never sent to clients.
fn internal_error() -> Response {
    let body = json!({
        "error": "An internal error occurred",
        "code": "INTERNAL_ERROR",
    });

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
