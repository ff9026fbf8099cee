use thiserror::Error;

/// Errors that can occur during calculation or template/record management.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ForderungError {
    /// Input rejected before any calculation or write.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Template or case financial record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Operation refused (e.g. deleting the default template).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Underlying store failed; no partial writes remain.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "cost_items[2].amount").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collapse a list of field errors into a single `Validation` error.
pub fn validation_failure(errors: &[ValidationError]) -> ForderungError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    ForderungError::Validation(msg)
}
