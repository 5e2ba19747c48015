//! In-process todo storage for development and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use todo_core::types::DbId;

use super::TodoRepository;
use crate::models::todo::{NewTodo, Todo};

/// Todo storage held in a map. Contents are lost when the process exits.
///
/// Ids start at 1 and are handed out by an atomic counter, so concurrent
/// creates never share an id even before the map lock is taken.
#[derive(Debug)]
pub struct InMemoryTodoRepo {
    next_id: AtomicI64,
    todos: RwLock<HashMap<DbId, Todo>>,
}

impl InMemoryTodoRepo {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            todos: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored todos.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

impl Default for InMemoryTodoRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepo {
    async fn create(&self, todo: NewTodo) -> Result<Todo, sqlx::Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let todo = todo.with_id(id);
        self.todos.write().await.insert(id, todo.clone());
        tracing::debug!(todo_id = id, "Stored todo in memory");
        Ok(todo)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        Ok(self.todos.read().await.get(&id).cloned())
    }
}
