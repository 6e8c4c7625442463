//! Result types for verification operations

use chrono::{DateTime, Utc};

/// Acknowledgment of an issued challenge
///
/// The passcode itself is never returned to the caller; it must arrive
/// out-of-band via SMS.
#[derive(Debug, Clone)]
pub struct ChallengeIssued {
    /// When the issued challenge expires
    pub expires_at: DateTime<Utc>,
}
