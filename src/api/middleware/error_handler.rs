//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError,
//! providing consistent error response formatting across the API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Duplicate → 409 CONFLICT
    /// - ValidationErrors → 400 BAD_REQUEST
    /// - InvalidParameter → 400 BAD_REQUEST
    /// - BadRequest → 400 BAD_REQUEST
    /// - WrongPassword → 403 FORBIDDEN
    /// - Store → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let code = error_to_code(&self);

        let error_response = match &self {
            AppError::ValidationErrors { errors } => {
                ErrorResponse::new(code, &self.to_string()).with_field_errors(errors)
            }
            // Display for these variants carries no source detail; the
            // full chain goes to the log, not to the client.
            AppError::Store { operation, source } => {
                tracing::error!(operation = %operation, error = ?source, "store operation failed");
                ErrorResponse::new(code, &self.to_string())
            }
            AppError::Internal { source } => {
                tracing::error!(error = ?source, "internal error");
                ErrorResponse::new(code, "An internal error occurred")
            }
            _ => ErrorResponse::new(code, &self.to_string()),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::WrongPassword => StatusCode::FORBIDDEN,
        AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::InvalidParameter { .. } => "INVALID_PARAMETER",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::WrongPassword => "WRONG_PASSWORD",
        AppError::Store { .. } => "STORE_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}
