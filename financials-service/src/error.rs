//! Error types for financials-service.

use service_core::error::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the calculation core and its orchestration.
///
/// Missing configuration and missing cost records are not errors: they
/// resolve to defaults and zero cost respectively.
#[derive(Debug, Error)]
pub enum FinancialsError {
    /// Input rejected before any computation; `field` names the offending value.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Record source error: {0}")]
    Source(#[from] anyhow::Error),
}

impl FinancialsError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FinancialsError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field of a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            FinancialsError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            FinancialsError::Validation { .. } => "validation",
            FinancialsError::NotFound { .. } => "not_found",
            FinancialsError::Source(_) => "record_source",
        }
    }
}

impl From<FinancialsError> for AppError {
    fn from(err: FinancialsError) -> Self {
        match err {
            FinancialsError::Validation { .. } => AppError::BadRequest(anyhow::anyhow!("{}", err)),
            FinancialsError::NotFound { .. } => AppError::NotFound(anyhow::anyhow!("{}", err)),
            FinancialsError::Source(e) => AppError::DatabaseError(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = FinancialsError::validation("line_items[0].quantity", "must not be negative");
        assert_eq!(err.field(), Some("line_items[0].quantity"));
        assert_eq!(
            err.to_string(),
            "Invalid line_items[0].quantity: must not be negative"
        );
    }

    #[test]
    fn test_maps_to_app_error() {
        let app: AppError = FinancialsError::validation("discount_amount", "negative").into();
        assert!(matches!(app, AppError::BadRequest(_)));

        let app: AppError = FinancialsError::NotFound {
            entity: "Payout",
            id: Uuid::nil(),
        }
        .into();
        assert!(matches!(app, AppError::NotFound(_)));
    }
}
