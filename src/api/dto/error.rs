//! Error response DTOs.

use serde::Serialize;

use crate::error::ValidationFieldError;

/// Standard error response format.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldErrorDetail>>,
}

/// One failed request field, carried under `details`.
#[derive(Debug, Serialize)]
pub struct FieldErrorDetail {
    pub field: String,
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Attaches the per-field validation breakdown.
    pub fn with_field_errors(mut self, errors: &[ValidationFieldError]) -> Self {
        self.details = Some(
            errors
                .iter()
                .map(|error| FieldErrorDetail {
                    field: error.field.clone(),
                    message: error.message.clone(),
                })
                .collect(),
        );
        self
    }
}
