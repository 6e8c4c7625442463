//! Vonage (Nexmo) SMS transport

use async_trait::async_trait;
use tracing::debug;

use turno_shared::phone::mask_phone_number;

use crate::config::SmsConfig;

use super::{SmsError, SmsTransport};

const VONAGE_SMS_URL: &str = "https://rest.nexmo.com/sms/json";

/// Vonage credentials
#[derive(Debug, Clone)]
pub struct VonageConfig {
    /// Vonage API key
    pub api_key: String,
    /// Vonage API secret
    pub api_secret: String,
    /// Sending number or sender id
    pub from_number: String,
}

impl VonageConfig {
    /// Build from the generic SMS configuration, rejecting missing credentials
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, SmsError> {
        if config.account_id.is_empty() || config.secret.is_empty() || config.from_number.is_empty()
        {
            return Err(SmsError::Config(
                "Vonage credentials not configured".to_string(),
            ));
        }
        Ok(Self {
            api_key: config.account_id.clone(),
            api_secret: config.secret.clone(),
            from_number: config.from_number.clone(),
        })
    }
}

/// Vonage transport: form POST with credentials in the body
///
/// Vonage answers HTTP 200 even for rejected messages; the per-message
/// `status` field in the JSON payload is the authoritative success signal
/// ("0" means accepted).
pub struct VonageSms {
    client: reqwest::Client,
    config: VonageConfig,
}

impl VonageSms {
    pub fn new(config: VonageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SmsTransport for VonageSms {
    async fn submit(&self, to: &str, body: &str) -> Result<(), SmsError> {
        let params = [
            ("api_key", self.config.api_key.as_str()),
            ("api_secret", self.config.api_secret.as_str()),
            ("to", to),
            ("from", self.config.from_number.as_str()),
            ("text", body),
        ];

        debug!(
            phone = %mask_phone_number(to),
            "Submitting SMS to Vonage"
        );

        let response = self
            .client
            .post(VONAGE_SMS_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| SmsError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(SmsError::Transport(format!(
                "Vonage API returned {status}: {detail}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SmsError::Transport(format!("Unreadable Vonage response: {e}")))?;

        let message_status = payload
            .get("messages")
            .and_then(|m| m.get(0))
            .and_then(|m| m.get("status"))
            .and_then(|s| s.as_str());

        if message_status != Some("0") {
            return Err(SmsError::Transport(format!(
                "Vonage rejected the message (status {})",
                message_status.unwrap_or("missing")
            )));
        }

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "vonage"
    }
}
