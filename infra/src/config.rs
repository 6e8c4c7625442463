//! Configuration for infrastructure services
//!
//! Environment-driven; variable names match the deployment's existing
//! secrets. Credential validation happens when the consuming service is
//! constructed, so a missing secret surfaces as a configuration error,
//! never as a retryable runtime fault.

use serde::{Deserialize, Serialize};

/// SMS transport configuration: a selected provider plus its credential
/// triple (account id / secret / sending number)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Provider name: "twilio", "vonage", or "mock"
    pub provider: String,
    /// Account identifier (Twilio Account SID / Vonage API key)
    pub account_id: String,
    /// Secret (Twilio auth token / Vonage API secret)
    pub secret: String,
    /// Sending phone number
    pub from_number: String,
}

impl SmsConfig {
    /// Load from the environment; the provider defaults to "twilio"
    pub fn from_env() -> Self {
        let provider =
            std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "twilio".to_string());
        let (account_var, secret_var, from_var) = match provider.as_str() {
            "vonage" => ("VONAGE_API_KEY", "VONAGE_API_SECRET", "VONAGE_FROM_NUMBER"),
            _ => ("TWILIO_ACCOUNT_SID", "TWILIO_AUTH_TOKEN", "TWILIO_PHONE_NUMBER"),
        };
        Self {
            provider,
            account_id: std::env::var(account_var).unwrap_or_default(),
            secret: std::env::var(secret_var).unwrap_or_default(),
            from_number: std::env::var(from_var).unwrap_or_default(),
        }
    }

    /// A mock configuration for development and tests
    pub fn mock() -> Self {
        Self {
            provider: "mock".to_string(),
            account_id: String::new(),
            secret: String::new(),
            from_number: "+15550000000".to_string(),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL connection URL
    pub url: String,
    /// Maximum pool connections
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or_default(),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
