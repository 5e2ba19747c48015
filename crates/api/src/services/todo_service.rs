//! Todo creation: defaulting, persistence, and response mapping.

use std::sync::Arc;

use todo_core::todo::{CreateTodoRequest, TodoResponse};
use todo_db::models::todo::{NewTodo, Todo};
use todo_db::repositories::TodoRepository;

/// Builds todo entities from requests and hands them to the repository.
///
/// Requests are not validated here; callers run
/// [`validate_create_todo`](todo_core::todo::validate_create_todo) first.
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Persist a todo built from `request` and return its representation.
    ///
    /// A missing `completed` flag is stored as `false`. Exactly one
    /// repository write is issued; its error, if any, is returned unchanged.
    pub async fn create_todo(
        &self,
        request: CreateTodoRequest,
    ) -> Result<TodoResponse, sqlx::Error> {
        let completed = request.completed_or_default();
        let new_todo = NewTodo {
            title: request.title.unwrap_or_default(),
            description: request.description,
            completed,
        };

        let todo = self.repo.create(new_todo).await?;

        tracing::info!(todo_id = todo.id, completed = todo.completed, "Todo created");

        Ok(to_response(todo))
    }
}

fn to_response(todo: Todo) -> TodoResponse {
    TodoResponse {
        id: todo.id,
        title: todo.title,
        description: todo.description,
        completed: todo.completed,
    }
}
