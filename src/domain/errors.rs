use thiserror::Error;
use uuid::Uuid;

/// Errors raised by schema validation and repository operations
///
/// None of these are fatal: the API layer turns each one into a client
/// error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// A caller-supplied identifier is already taken
    #[error("{0}")]
    Conflict(String),

    /// No record with this identifier
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: Uuid },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(kind: &'static str, id: Uuid) -> Self {
        Self::NotFound { kind, id }
    }
}
