//! Repository for the `todos` table.

use async_trait::async_trait;
use sqlx::PgPool;
use todo_core::types::DbId;

use super::TodoRepository;
use crate::models::todo::{NewTodo, Todo};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, title, description, completed";

/// PostgreSQL-backed todo storage. Ids come from the `BIGSERIAL` sequence.
#[derive(Clone)]
pub struct PgTodoRepo {
    pool: PgPool,
}

impl PgTodoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepo {
    async fn create(&self, todo: NewTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, completed) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .fetch_one(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
