//! Domain types, validation rules, and error definitions shared by the
//! database and API crates.

pub mod error;
pub mod todo;
pub mod types;
pub mod validation;
