//! External collaborator contract for account profiles.
//!
//! The verification subsystem only writes the phone-verified flag outward;
//! profile management itself lives elsewhere.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainResult;

mod mock;

pub use mock::MockProfileRepository;

/// Propagates a successful verification to the owning account profile
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Record the phone as trusted on the account's profile
    async fn mark_phone_verified(&self, account_id: Uuid, phone: &str) -> DomainResult<()>;
}
