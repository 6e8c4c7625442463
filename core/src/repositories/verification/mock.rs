//! In-memory verification store for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::phone_verification::PhoneVerification;
use crate::errors::{DomainError, DomainResult};

type ChallengeKey = (Uuid, String);

/// In-memory implementation of [`super::VerificationRepository`]
///
/// Holds challenges in a map keyed by (account, phone). A `should_fail`
/// switch makes every operation return a store error, for testing the
/// failure paths.
#[derive(Clone, Default)]
pub struct MockVerificationRepository {
    challenges: Arc<Mutex<HashMap<ChallengeKey, PhoneVerification>>>,
    should_fail: bool,
}

impl MockVerificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            challenges: Arc::new(Mutex::new(HashMap::new())),
            should_fail: true,
        }
    }

    /// Read back the stored challenge, bypassing the trait
    pub fn stored_challenge(&self, account_id: Uuid, phone: &str) -> Option<PhoneVerification> {
        self.challenges
            .lock()
            .unwrap()
            .get(&(account_id, phone.to_string()))
            .cloned()
    }

    /// Overwrite the stored expiry, simulating clock advance
    pub fn set_expiry(&self, account_id: Uuid, phone: &str, expires_at: DateTime<Utc>) {
        if let Some(challenge) = self
            .challenges
            .lock()
            .unwrap()
            .get_mut(&(account_id, phone.to_string()))
        {
            challenge.expires_at = expires_at;
        }
    }

    fn store_error() -> DomainError {
        DomainError::Store {
            message: "mock store failure".to_string(),
        }
    }
}

#[async_trait]
impl super::VerificationRepository for MockVerificationRepository {
    async fn upsert_challenge(&self, challenge: &PhoneVerification) -> DomainResult<()> {
        if self.should_fail {
            return Err(Self::store_error());
        }
        self.challenges.lock().unwrap().insert(
            (challenge.account_id, challenge.phone.clone()),
            challenge.clone(),
        );
        Ok(())
    }

    async fn find_challenge(
        &self,
        account_id: Uuid,
        phone: &str,
    ) -> DomainResult<Option<PhoneVerification>> {
        if self.should_fail {
            return Err(Self::store_error());
        }
        Ok(self.stored_challenge(account_id, phone))
    }

    async fn record_failed_attempt(&self, account_id: Uuid, phone: &str) -> DomainResult<()> {
        if self.should_fail {
            return Err(Self::store_error());
        }
        let mut challenges = self.challenges.lock().unwrap();
        match challenges.get_mut(&(account_id, phone.to_string())) {
            Some(challenge) => {
                challenge.attempts += 1;
                Ok(())
            }
            None => Err(Self::store_error()),
        }
    }

    async fn mark_verified(&self, account_id: Uuid, phone: &str) -> DomainResult<()> {
        if self.should_fail {
            return Err(Self::store_error());
        }
        let mut challenges = self.challenges.lock().unwrap();
        match challenges.get_mut(&(account_id, phone.to_string())) {
            Some(challenge) => {
                challenge.verified = true;
                Ok(())
            }
            None => Err(Self::store_error()),
        }
    }
}
