//! Request handlers.
//!
//! Handlers run request validation, delegate to a service in
//! [`crate::services`], and map errors via [`AppError`](crate::error::AppError).

pub mod todo;
