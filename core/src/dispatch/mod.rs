//! SMS dispatch contract
//!
//! The dispatcher abstracts over interchangeable SMS transport providers.
//! One provider is selected from configuration at construction time, never
//! per call, and every call makes exactly one outbound attempt. Retry
//! policy, if any, belongs to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message category, informational only; never alters delivery logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsCategory {
    Otp,
    Booking,
    Reminder,
    Confirmation,
}

impl SmsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmsCategory::Otp => "otp",
            SmsCategory::Booking => "booking",
            SmsCategory::Reminder => "reminder",
            SmsCategory::Confirmation => "confirmation",
        }
    }
}

/// Broad failure class, exposed for logging only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryErrorKind {
    /// Required provider credentials are absent; fatal for the call
    Configuration,
    /// Provider reported a non-success status or a negative success indicator
    Transport,
    /// Request-level failure before the provider answered
    Network,
}

/// Opaque delivery failure
///
/// Provider-specific shapes never cross this boundary; `Display` is uniform
/// regardless of the underlying cause. The kind is available for structured
/// logs.
#[derive(Debug, Clone, Error)]
#[error("SMS delivery failed")]
pub struct DeliveryError {
    kind: DeliveryErrorKind,
}

impl DeliveryError {
    pub fn configuration() -> Self {
        Self {
            kind: DeliveryErrorKind::Configuration,
        }
    }

    pub fn transport() -> Self {
        Self {
            kind: DeliveryErrorKind::Transport,
        }
    }

    pub fn network() -> Self {
        Self {
            kind: DeliveryErrorKind::Network,
        }
    }

    pub fn kind(&self) -> DeliveryErrorKind {
        self.kind
    }
}

/// Contract for sending SMS messages through the configured provider
#[async_trait]
pub trait SmsDispatcher: Send + Sync {
    /// Send one message; exactly one outbound attempt, no internal retries
    async fn send(
        &self,
        destination: &str,
        message: &str,
        category: SmsCategory,
    ) -> Result<(), DeliveryError>;
}
