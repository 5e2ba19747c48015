//! Response body shapes shared by handlers and the error boundary.

use serde::{Deserialize, Serialize};
use todo_core::validation::FieldError;

/// Body of a `400 Bad Request`: one entry per violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<FieldError>,
}
