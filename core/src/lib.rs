//! # Turno Core
//!
//! Core business logic and domain layer for the Turno backend.
//! This crate contains the phone-verification domain entity, the
//! verification service state machine, the SMS dispatch contract,
//! repository interfaces, and the error types shared across layers.

pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use dispatch::{DeliveryError, DeliveryErrorKind, SmsCategory, SmsDispatcher};
pub use domain::entities::phone_verification::{
    PhoneVerification, CODE_EXPIRATION_MINUTES, CODE_LENGTH, MAX_ATTEMPTS,
};
pub use errors::{DomainError, DomainResult, VerificationError};
pub use repositories::{ProfileRepository, VerificationRepository};
pub use services::verification::{VerificationFlow, VerificationService, VerificationServiceConfig};
