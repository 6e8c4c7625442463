//! Phone verification challenge entity.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of wrong-code submissions tolerated per challenge
pub const MAX_ATTEMPTS: i32 = 3;

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Minutes until a freshly issued challenge expires
pub const CODE_EXPIRATION_MINUTES: i64 = 15;

/// One verification challenge for an (account, phone) pair
///
/// At most one challenge exists per pair; a new request for the same pair
/// supersedes the row, replacing code/expiry and resetting attempts. Once
/// `verified` flips to true the record is inert: attempts and expiry are
/// never consulted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneVerification {
    /// Account that requested the challenge; immutable after creation
    pub account_id: Uuid,

    /// Destination phone number being verified; immutable after creation
    pub phone: String,

    /// The 6-digit passcode, regenerated on every request
    pub code: String,

    /// Failed-submission counter, reset to 0 on every fresh request
    pub attempts: i32,

    /// Timestamp when the challenge was created
    pub created_at: DateTime<Utc>,

    /// Timestamp after which submissions are rejected
    pub expires_at: DateTime<Utc>,

    /// Monotonic false-to-true success flag
    pub verified: bool,
}

impl PhoneVerification {
    /// Create a fresh challenge with a newly generated passcode
    pub fn new(account_id: Uuid, phone: String) -> Self {
        Self::new_with_expiration(account_id, phone, CODE_EXPIRATION_MINUTES)
    }

    /// Create a fresh challenge with a custom expiration window
    pub fn new_with_expiration(
        account_id: Uuid,
        phone: String,
        expiration_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            account_id,
            phone,
            code: Self::generate_code(),
            attempts: 0,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified: false,
        }
    }

    /// Generate a zero-padded 6-digit passcode from the OS CSPRNG
    ///
    /// The modulo introduces a negligible bias for 6-digit codes. Collisions
    /// across concurrent challenges are accepted, not treated as errors.
    pub fn generate_code() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:06}", num)
    }

    /// Whether the challenge window has closed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whether the attempt ceiling has been reached
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }
}
