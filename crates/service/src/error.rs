//! Typed error enum for the service layer.
//!
//! Unifies storage, provider, and validation failures into a single error
//! type so HTTP handlers can map each failure mode to its status code.

use skywatch_provider::ProviderError;
use skywatch_storage::StorageError;
use thiserror::Error;

/// One field-level validation failure.
#[derive(Debug, Clone)]
pub struct FieldError {
    /// JSON field name as it appears on the wire.
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Service-layer error unifying storage, provider, and validation failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Provider API call failed.
    #[error("provider: {0}")]
    Provider(#[from] ProviderError),

    /// Caller supplied invalid input; carries field-level messages.
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// A near-identical location already exists.
    #[error("location already exists: {name} (id {id})")]
    Conflict { id: i64, name: String },
}

fn format_fields(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl ServiceError {
    /// Whether this error represents a missing location or city.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Storage(StorageError::NotFound { .. }) | Self::Provider(ProviderError::NotFound(_))
        )
    }

    /// Whether this error is a duplicate-location conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Whether this error is a validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
