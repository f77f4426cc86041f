//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Two families live here. `IntegrityViolation`, `NotFound` and `Conflict` are
/// expected outcomes the UI reports back to the user; the store is left
/// unchanged when they are returned. `InvalidUsage` and `IndexOutOfRange` mean
/// the calling code broke a contract (wrong validator entry point, an index that
/// did not come from a lookup) and should abort the operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A caller contract was broken.
    #[error("invalid usage: {0}")]
    InvalidUsage(String),

    /// An operation would leave a dangling association.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),

    /// An update targeted a position outside the sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A requested entity was not found.
    #[error("not found")]
    NotFound,

    /// The request conflicts with current state (e.g. duplicate association).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_usage(msg: impl Into<String>) -> Self {
        Self::InvalidUsage(msg.into())
    }

    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::IntegrityViolation(msg.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether this error signals a bug in the caller rather than a user-correctable condition.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidUsage(_) | Self::IndexOutOfRange { .. })
    }
}
