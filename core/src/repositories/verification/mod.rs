//! Durable store contract for verification challenges.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::phone_verification::PhoneVerification;
use crate::errors::DomainResult;

mod mock;

pub use mock::MockVerificationRepository;

/// Store holding one challenge row per (account, phone) pair
///
/// The store must provide atomic upsert and atomic attempt increments per
/// key so that concurrent submissions serialize their attempt accounting.
/// Rows are never deleted by this subsystem; a fresh upsert supersedes the
/// prior challenge.
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Insert or replace the challenge for its (account, phone) key,
    /// resetting code, expiry, attempts, and the verified flag
    async fn upsert_challenge(&self, challenge: &PhoneVerification) -> DomainResult<()>;

    /// Fetch the current challenge for the pair, if any
    async fn find_challenge(
        &self,
        account_id: Uuid,
        phone: &str,
    ) -> DomainResult<Option<PhoneVerification>>;

    /// Atomically increment the failed-attempt counter for the pair
    async fn record_failed_attempt(&self, account_id: Uuid, phone: &str) -> DomainResult<()>;

    /// Flip the verified flag to true for the pair
    async fn mark_verified(&self, account_id: Uuid, phone: &str) -> DomainResult<()>;
}
