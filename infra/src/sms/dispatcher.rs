//! Dispatcher over the configured SMS transport

use async_trait::async_trait;
use tracing::{error, info};

use turno_core::dispatch::{DeliveryError, SmsCategory, SmsDispatcher};
use turno_shared::phone::mask_phone_number;

use super::{SmsError, SmsTransport};

/// Holds the one transport selected from configuration
///
/// Uniform behaviour regardless of provider: one outbound attempt per
/// call, failures collapsed into the opaque [`DeliveryError`]. Retry
/// policy, if a caller wants one, lives with the caller.
pub struct ProviderDispatcher {
    transport: Box<dyn SmsTransport>,
}

impl std::fmt::Debug for ProviderDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDispatcher")
            .field("provider", &self.transport.provider_name())
            .finish()
    }
}

impl ProviderDispatcher {
    pub fn new(transport: Box<dyn SmsTransport>) -> Self {
        Self { transport }
    }

    pub fn provider_name(&self) -> &'static str {
        self.transport.provider_name()
    }
}

#[async_trait]
impl SmsDispatcher for ProviderDispatcher {
    async fn send(
        &self,
        destination: &str,
        message: &str,
        category: SmsCategory,
    ) -> Result<(), DeliveryError> {
        if destination.is_empty() || message.is_empty() {
            return Err(SmsError::InvalidRequest(
                "destination and message must be non-empty".to_string(),
            )
            .into());
        }

        match self.transport.submit(destination, message).await {
            Ok(()) => {
                info!(
                    provider = self.transport.provider_name(),
                    phone = %mask_phone_number(destination),
                    category = category.as_str(),
                    event = "sms_sent",
                    "SMS submitted to provider"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    provider = self.transport.provider_name(),
                    phone = %mask_phone_number(destination),
                    category = category.as_str(),
                    error = %e,
                    event = "sms_send_failed",
                    "SMS submission failed"
                );
                Err(e.into())
            }
        }
    }
}
