use crate::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more request fields broke a validation rule.
    #[error("Validation failed on {} field(s)", .0.len())]
    InvalidFields(Vec<FieldError>),
}
