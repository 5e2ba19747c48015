//! Handlers for todo creation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use todo_core::error::CoreError;
use todo_core::todo::{validate_create_todo, CreateTodoRequest};

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /todos
// ---------------------------------------------------------------------------

/// Create a todo.
///
/// Responds `201` with the created todo, or `400` listing every violated
/// field rule. A body that is not valid JSON for the request shape is also
/// a `400`, reported against the `body` field.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    let violations = validate_create_todo(&input);
    if !violations.is_empty() {
        tracing::debug!(violations = violations.len(), "Rejected todo creation");
        return Err(CoreError::InvalidFields(violations).into());
    }

    let todo = state.todo_service.create_todo(input).await?;

    Ok((StatusCode::CREATED, Json(todo)))
}
