//! Payloads for the `/verify-phone` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `/verify-phone`.
///
/// The `action` field selects between requesting a new code and
/// submitting one for verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum VerifyPhoneRequest {
    /// Issue a fresh code and deliver it to the phone.
    Request { phone: String },
    /// Check a submitted code against the pending challenge.
    Verify { phone: String, otp: String },
}

/// Success body for both `/verify-phone` actions.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPhoneResponse {
    pub message: String,
}

impl VerifyPhoneResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
