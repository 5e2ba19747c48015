use std::sync::Arc;

use todo_db::repositories::TodoRepository;

use crate::services::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Todo creation service.
    pub todo_service: Arc<TodoService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            todo_service: Arc::new(TodoService::new(repo)),
        }
    }
}
