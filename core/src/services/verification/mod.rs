//! Phone verification service module
//!
//! Implements the OTP state machine: challenge issuance with best-effort SMS
//! dispatch, code submission with expiry and attempt-ceiling enforcement,
//! and the client-side two-step flow driver.

mod config;
mod flow;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use flow::{FlowState, VerificationFlow, LOCAL_ATTEMPT_LIMIT};
pub use service::VerificationService;
pub use types::ChallengeIssued;
