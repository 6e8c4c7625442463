//! Business services implementing the verification protocol.

pub mod verification;

pub use verification::{VerificationFlow, VerificationService, VerificationServiceConfig};
