//! Error taxonomy for the phone-verification domain
//!
//! Every recoverable failure requires an explicit new client action: resubmit
//! the code, or restart with a fresh challenge request. Nothing here is
//! retried internally.

use thiserror::Error;

/// Verification-specific failures surfaced to callers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// Phone number failed the region pattern gate
    #[error("Invalid phone number format: {phone}")]
    InvalidPhoneFormat { phone: String },

    /// No challenge exists for this (account, phone) pair
    #[error("Verification record not found")]
    CodeNotFound,

    /// The challenge expired; a new request is required
    #[error("OTP has expired")]
    CodeExpired,

    /// Attempt ceiling reached; a new request is required
    #[error("Too many attempts")]
    MaxAttemptsExceeded,

    /// Wrong code; the caller may retry up to the attempt ceiling
    #[error("Invalid OTP")]
    InvalidCode,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable machine-readable code for the API boundary
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "validation_error",
            DomainError::Unauthorized => "unauthorized",
            DomainError::Store { .. } => "store_error",
            DomainError::Internal { .. } => "internal_error",
            DomainError::Verification(e) => match e {
                VerificationError::InvalidPhoneFormat { .. } => "invalid_phone_format",
                VerificationError::CodeNotFound => "not_found",
                VerificationError::CodeExpired => "otp_expired",
                VerificationError::MaxAttemptsExceeded => "too_many_attempts",
                VerificationError::InvalidCode => "invalid_otp",
            },
        }
    }
}
