//! Ordering-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by the ordering handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// A customer could not be reached.
    CustomerNotFound(String),
    /// Publishing or handling an event failed.
    Infrastructure(String),
}

impl OrderError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        OrderError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            OrderError::CustomerNotFound(_) => ErrorCode::CustomerNotFound,
            OrderError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            OrderError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            OrderError::CustomerNotFound(customer) => format!("Customer not found: {}", customer),
            OrderError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OrderError {}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CustomerNotFound => OrderError::CustomerNotFound(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::InvalidFormat
            | ErrorCode::UnknownMenuEntry => OrderError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => OrderError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for OrderError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field, .. } => {
                field.clone()
            }
            ValidationError::UnknownValue { kind, .. } => kind.to_string(),
        };
        OrderError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_publish_failure_maps_to_infrastructure() {
        let err: OrderError =
            DomainError::new(ErrorCode::EventPublishFailed, "bus unavailable").into();
        assert!(matches!(err, OrderError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.to_string().contains("bus unavailable"));
    }

    #[test]
    fn domain_validation_keeps_field_detail() {
        let err: OrderError = DomainError::validation("item", "empty chain").into();
        assert_eq!(err, OrderError::validation("item", "empty chain"));
    }

    #[test]
    fn validation_error_uses_kind_as_field() {
        let err: OrderError = ValidationError::unknown_value("add-on", "oat milk").into();
        assert_eq!(
            err,
            OrderError::validation("add-on", "Unknown add-on 'oat milk'")
        );
    }

    #[test]
    fn customer_not_found_keeps_domain_message() {
        let err: OrderError =
            DomainError::new(ErrorCode::CustomerNotFound, "No attached customer Juan").into();
        assert_eq!(err.to_string(), "Customer not found: No attached customer Juan");
        assert_eq!(err.code(), ErrorCode::CustomerNotFound);
    }
}
