//! Twilio SMS transport

use async_trait::async_trait;
use tracing::debug;

use turno_shared::phone::mask_phone_number;

use crate::config::SmsConfig;

use super::{SmsError, SmsTransport};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio credentials
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Sending number (must be a Twilio number in E.164 format)
    pub from_number: String,
}

impl TwilioConfig {
    /// Build from the generic SMS configuration, rejecting missing credentials
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, SmsError> {
        if config.account_id.is_empty() || config.secret.is_empty() || config.from_number.is_empty()
        {
            return Err(SmsError::Config(
                "Twilio credentials not configured".to_string(),
            ));
        }
        if !config.from_number.starts_with('+') {
            return Err(SmsError::Config(
                "Twilio sending number must be in E.164 format".to_string(),
            ));
        }
        Ok(Self {
            account_sid: config.account_id.clone(),
            auth_token: config.secret.clone(),
            from_number: config.from_number.clone(),
        })
    }
}

/// Twilio transport: basic-auth form POST to the Messages endpoint
pub struct TwilioSms {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSms {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SmsTransport for TwilioSms {
    async fn submit(&self, to: &str, body: &str) -> Result<(), SmsError> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        );
        let params = [
            ("From", self.config.from_number.as_str()),
            ("To", to),
            ("Body", body),
        ];

        debug!(
            phone = %mask_phone_number(to),
            "Submitting SMS to Twilio"
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| SmsError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(SmsError::Transport(format!(
                "Twilio API returned {status}: {detail}"
            )));
        }

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "twilio"
    }
}
