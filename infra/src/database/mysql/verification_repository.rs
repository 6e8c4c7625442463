//! MySQL-backed verification challenge store
//!
//! One row per (user_id, phone) with a unique key on the pair. The upsert
//! and the attempt increment are single statements, so concurrent
//! submissions for the same row serialize inside the database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use turno_core::domain::entities::phone_verification::PhoneVerification;
use turno_core::errors::{DomainError, DomainResult};
use turno_core::repositories::VerificationRepository;
use turno_shared::phone::mask_phone_number;

pub struct MySqlVerificationRepository {
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn store_error(context: &str, e: sqlx::Error) -> DomainError {
        DomainError::Store {
            message: format!("{context}: {e}"),
        }
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn upsert_challenge(&self, challenge: &PhoneVerification) -> DomainResult<()> {
        let query = r#"
            INSERT INTO phone_verifications
                (user_id, phone, otp_code, verified, attempts, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                otp_code = VALUES(otp_code),
                verified = VALUES(verified),
                attempts = VALUES(attempts),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(challenge.account_id.to_string())
            .bind(&challenge.phone)
            .bind(&challenge.code)
            .bind(challenge.verified)
            .bind(challenge.attempts)
            .bind(challenge.created_at)
            .bind(challenge.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone_number(&challenge.phone),
                    error = %e,
                    "Failed to upsert verification challenge"
                );
                Self::store_error("Failed to upsert verification challenge", e)
            })?;

        debug!(
            phone = %mask_phone_number(&challenge.phone),
            "Upserted verification challenge"
        );
        Ok(())
    }

    async fn find_challenge(
        &self,
        account_id: Uuid,
        phone: &str,
    ) -> DomainResult<Option<PhoneVerification>> {
        let query = r#"
            SELECT user_id, phone, otp_code, verified, attempts, created_at, expires_at
            FROM phone_verifications
            WHERE user_id = ? AND phone = ?
        "#;

        let row = sqlx::query(query)
            .bind(account_id.to_string())
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "Failed to fetch verification challenge"
                );
                Self::store_error("Failed to fetch verification challenge", e)
            })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| Self::store_error("Failed to read user_id", e))?;
        let account_id = Uuid::parse_str(&user_id).map_err(|e| DomainError::Store {
            message: format!("Malformed user_id in store: {e}"),
        })?;
        let phone: String = row
            .try_get("phone")
            .map_err(|e| Self::store_error("Failed to read phone", e))?;
        let code: String = row
            .try_get("otp_code")
            .map_err(|e| Self::store_error("Failed to read otp_code", e))?;
        let verified: bool = row
            .try_get("verified")
            .map_err(|e| Self::store_error("Failed to read verified", e))?;
        let attempts: i32 = row
            .try_get("attempts")
            .map_err(|e| Self::store_error("Failed to read attempts", e))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| Self::store_error("Failed to read created_at", e))?;
        let expires_at: DateTime<Utc> = row
            .try_get("expires_at")
            .map_err(|e| Self::store_error("Failed to read expires_at", e))?;

        Ok(Some(PhoneVerification {
            account_id,
            phone,
            code,
            attempts,
            created_at,
            expires_at,
            verified,
        }))
    }

    async fn record_failed_attempt(&self, account_id: Uuid, phone: &str) -> DomainResult<()> {
        let query = r#"
            UPDATE phone_verifications
            SET attempts = attempts + 1
            WHERE user_id = ? AND phone = ?
        "#;

        sqlx::query(query)
            .bind(account_id.to_string())
            .bind(phone)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "Failed to record failed attempt"
                );
                Self::store_error("Failed to record failed attempt", e)
            })?;

        Ok(())
    }

    async fn mark_verified(&self, account_id: Uuid, phone: &str) -> DomainResult<()> {
        let query = r#"
            UPDATE phone_verifications
            SET verified = TRUE
            WHERE user_id = ? AND phone = ?
        "#;

        sqlx::query(query)
            .bind(account_id.to_string())
            .bind(phone)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "Failed to mark challenge verified"
                );
                Self::store_error("Failed to mark challenge verified", e)
            })?;

        Ok(())
    }
}
