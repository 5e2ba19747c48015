//! Repository layer.
//!
//! [`TodoRepository`] is the storage contract the API depends on. Each
//! implementation owns its backing store, so handlers hold it behind an
//! `Arc<dyn TodoRepository>` and never see which engine is in use.

pub mod memory_todo_repo;
pub mod todo_repo;

use async_trait::async_trait;
use todo_core::types::DbId;

use crate::models::todo::{NewTodo, Todo};

pub use memory_todo_repo::InMemoryTodoRepo;
pub use todo_repo::PgTodoRepo;

/// Storage for todo entities.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new todo and return it with its freshly assigned id.
    ///
    /// Ids are unique across concurrent callers, and the row is visible to
    /// [`find_by_id`](Self::find_by_id) once this returns.
    async fn create(&self, todo: NewTodo) -> Result<Todo, sqlx::Error>;

    /// Look up a todo by id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error>;
}
