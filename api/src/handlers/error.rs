//! Mapping from domain errors to HTTP responses.
//!
//! Recoverable verification failures are 400s with a stable error code so
//! clients can branch on them. Store and internal failures never leak
//! detail to the response body.

use actix_web::{http::StatusCode, HttpResponse};
use turno_core::errors::{DomainError, VerificationError};
use turno_shared::ErrorResponse;

/// Builds the error response for a failed domain operation.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let status = status_for(error);
    let message = if status.is_server_error() {
        "Internal server error".to_string()
    } else {
        error.to_string()
    };

    HttpResponse::build(status).json(ErrorResponse::new(error.code(), message))
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Store { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Verification(e) => match e {
            VerificationError::CodeNotFound => StatusCode::NOT_FOUND,
            VerificationError::InvalidPhoneFormat { .. }
            | VerificationError::CodeExpired
            | VerificationError::MaxAttemptsExceeded
            | VerificationError::InvalidCode => StatusCode::BAD_REQUEST,
        },
    }
}
