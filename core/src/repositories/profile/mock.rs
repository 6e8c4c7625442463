//! In-memory profile collaborator for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// In-memory implementation of [`super::ProfileRepository`]
#[derive(Clone, Default)]
pub struct MockProfileRepository {
    verified_phones: Arc<Mutex<HashMap<Uuid, String>>>,
    should_fail: bool,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            verified_phones: Arc::new(Mutex::new(HashMap::new())),
            should_fail: true,
        }
    }

    /// The phone recorded as verified for an account, if any
    pub fn verified_phone(&self, account_id: Uuid) -> Option<String> {
        self.verified_phones
            .lock()
            .unwrap()
            .get(&account_id)
            .cloned()
    }
}

#[async_trait]
impl super::ProfileRepository for MockProfileRepository {
    async fn mark_phone_verified(&self, account_id: Uuid, phone: &str) -> DomainResult<()> {
        if self.should_fail {
            return Err(DomainError::Store {
                message: "mock profile failure".to_string(),
            });
        }
        self.verified_phones
            .lock()
            .unwrap()
            .insert(account_id, phone.to_string());
        Ok(())
    }
}
