//! Route definitions for todos.

use axum::routing::post;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// POST   /                  -> create_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(todo::create_todo))
}
