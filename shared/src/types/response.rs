//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard success response wrapper
///
/// All successful endpoint responses carry `success: true` plus a
/// payload-specific body flattened alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response payload
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Unified error response body
///
/// Carries a machine-distinguishable error code plus a human-readable
/// message. Internal detail never crosses this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug)]
    struct Body {
        message: String,
    }

    #[test]
    fn success_response_flattens_payload() {
        let response = ApiResponse::success(Body {
            message: "OTP sent to phone".to_string(),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "message": "OTP sent to phone"})
        );
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let response = ErrorResponse::new("invalid_code", "Invalid OTP");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"], "invalid_code");
        assert_eq!(value["message"], "Invalid OTP");
    }
}
