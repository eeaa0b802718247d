//! Cycle evaluation errors.

use thiserror::Error;

/// Result type for cycle operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Input outside the domain where the cycle relations are defined.
///
/// This is the only failure the model produces. A failed evaluation never
/// returns partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl DomainError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidInput { field, reason }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }

    /// Human-readable reason the field was rejected.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidInput { reason, .. } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::invalid("pressure_ratio", "must be > 1");
        assert_eq!(err.to_string(), "Invalid input: pressure_ratio must be > 1");
        assert_eq!(err.field(), "pressure_ratio");
        assert_eq!(err.reason(), "must be > 1");
    }
}
