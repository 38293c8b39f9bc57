use crate::types::DbId;
use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Credentials were presented but rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The action needs a signed-in principal and none was supplied.
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
