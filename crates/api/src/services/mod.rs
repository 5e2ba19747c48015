//! Domain services sitting between handlers and repositories.

pub mod todo_service;

pub use todo_service::TodoService;
