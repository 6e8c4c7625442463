//! Payloads for the `/send-sms` endpoint.

use serde::{Deserialize, Serialize};
use turno_core::dispatch::SmsCategory;

/// Request body for `/send-sms`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendSmsRequest {
    pub to: String,
    pub message: String,
    /// Message category, defaults to a booking notification.
    #[serde(rename = "type", default = "default_category")]
    pub category: SmsCategory,
}

fn default_category() -> SmsCategory {
    SmsCategory::Booking
}

/// Success body for `/send-sms`.
#[derive(Debug, Clone, Serialize)]
pub struct SendSmsResponse {
    #[serde(rename = "type")]
    pub category: SmsCategory,
}
