//! MySQL-backed profile collaborator
//!
//! The profiles table belongs to the account subsystem; this repository
//! only writes the phone-verified flag outward after a successful
//! verification.

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::error;
use uuid::Uuid;

use turno_core::errors::{DomainError, DomainResult};
use turno_core::repositories::ProfileRepository;
use turno_shared::phone::mask_phone_number;

pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn mark_phone_verified(&self, account_id: Uuid, phone: &str) -> DomainResult<()> {
        let query = r#"
            UPDATE profiles
            SET phone = ?, phone_verified = TRUE
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(phone)
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "Failed to propagate verified phone to profile"
                );
                DomainError::Store {
                    message: format!("Failed to propagate verified phone: {e}"),
                }
            })?;

        Ok(())
    }
}
