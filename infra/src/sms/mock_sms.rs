//! Mock SMS transport for development and testing
//!
//! Logs messages instead of sending them and tracks how many were
//! submitted.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use turno_shared::phone::mask_phone_number;

use super::{SmsError, SmsTransport};

#[derive(Clone, Default)]
pub struct MockSms {
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockSms {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that fails every submission
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Number of messages submitted so far
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsTransport for MockSms {
    async fn submit(&self, to: &str, body: &str) -> Result<(), SmsError> {
        if self.simulate_failure {
            warn!(
                phone = %mask_phone_number(to),
                "Mock SMS transport simulating failure"
            );
            return Err(SmsError::Transport("simulated failure".to_string()));
        }

        self.message_count.fetch_add(1, Ordering::SeqCst);
        info!(
            phone = %mask_phone_number(to),
            body = body,
            "[MOCK SMS] message logged instead of sent"
        );
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
