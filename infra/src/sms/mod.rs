//! SMS transport module
//!
//! Provider implementations behind a single transport contract, plus the
//! dispatcher that holds the one configured provider. Providers differ only
//! in how they authenticate, submit, and read their API's success signal;
//! callers see none of that.

use async_trait::async_trait;
use thiserror::Error;

use turno_core::dispatch::DeliveryError;

use crate::config::SmsConfig;

mod dispatcher;
mod mock_sms;
mod twilio;
mod vonage;


pub use dispatcher::ProviderDispatcher;
pub use mock_sms::MockSms;
pub use twilio::{TwilioConfig, TwilioSms};
pub use vonage::{VonageConfig, VonageSms};

/// Internal SMS failure, never exposed past the dispatcher boundary
#[derive(Error, Debug)]
pub enum SmsError {
    /// Required provider credentials absent or malformed
    #[error("SMS configuration error: {0}")]
    Config(String),

    /// Provider answered with a non-success status or success indicator
    #[error("SMS transport error: {0}")]
    Transport(String),

    /// Request-level failure before the provider answered
    #[error("SMS network error: {0}")]
    Network(String),

    /// Caller violated the input contract (empty destination or message)
    #[error("Invalid SMS request: {0}")]
    InvalidRequest(String),
}

impl From<SmsError> for DeliveryError {
    fn from(err: SmsError) -> Self {
        match err {
            SmsError::Config(_) => DeliveryError::configuration(),
            SmsError::Network(_) => DeliveryError::network(),
            SmsError::Transport(_) | SmsError::InvalidRequest(_) => DeliveryError::transport(),
        }
    }
}

/// Common contract every transport provider implements
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Submit one message to the provider's API
    async fn submit(&self, to: &str, body: &str) -> Result<(), SmsError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}

/// Build the dispatcher for the configured provider
///
/// The provider is selected exactly once here; callers never branch per
/// call. Unknown provider names and missing credentials are configuration
/// errors.
pub fn create_dispatcher(config: &SmsConfig) -> Result<ProviderDispatcher, SmsError> {
    let transport: Box<dyn SmsTransport> = match config.provider.as_str() {
        "twilio" => Box::new(TwilioSms::new(TwilioConfig::from_sms_config(config)?)),
        "vonage" => Box::new(VonageSms::new(VonageConfig::from_sms_config(config)?)),
        "mock" => Box::new(MockSms::new()),
        other => {
            return Err(SmsError::Config(format!("Invalid SMS provider: {other}")));
        }
    };
    Ok(ProviderDispatcher::new(transport))
}
