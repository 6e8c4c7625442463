//! Configuration for the verification service

use crate::domain::entities::phone_verification::{CODE_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Configuration for the verification service
///
/// Injected at construction so tests can substitute deterministic values;
/// nothing is read from the ambient environment at call time.
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Minutes before an issued challenge expires
    pub code_expiration_minutes: i64,
    /// Maximum number of wrong-code submissions per challenge
    pub max_attempts: i32,
    /// Apply the region pattern gate during challenge requests
    ///
    /// The platform historically validated format only client-side; the
    /// server-side gate is a hardening step and can be switched off to
    /// match the old behaviour.
    pub validate_phone_format: bool,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: CODE_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            validate_phone_format: true,
        }
    }
}
