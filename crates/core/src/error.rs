use crate::types::DbId;

/// Domain-level errors shared by the service and HTTP layers.
///
/// `NotFound` is the only error the services raise on their own; it always
/// originates from an id-based lookup miss and renders as `ID NOT FOUND: {id}`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("ID NOT FOUND: {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the lookup-miss error on `entity` with the given id.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}
