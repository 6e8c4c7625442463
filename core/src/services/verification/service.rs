//! Verification service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use uuid::Uuid;

use turno_shared::phone::{mask_phone_number, validate_phone};

use crate::dispatch::{SmsCategory, SmsDispatcher};
use crate::domain::entities::phone_verification::PhoneVerification;
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::{ProfileRepository, VerificationRepository};

use super::config::VerificationServiceConfig;
use super::types::ChallengeIssued;

/// Stateless request handler implementing the OTP state machine
///
/// Per challenge the states are NONE → PENDING → VERIFIED. A re-request
/// restarts PENDING with a fresh code, expiry and attempt counter; an
/// expired or attempts-exhausted PENDING is a dead end that only a new
/// request can leave. There are no automatic transitions and no internal
/// retries.
pub struct VerificationService<R, P, D>
where
    R: VerificationRepository,
    P: ProfileRepository,
    D: SmsDispatcher,
{
    store: Arc<R>,
    profiles: Arc<P>,
    dispatcher: Arc<D>,
    config: VerificationServiceConfig,
}

impl<R, P, D> VerificationService<R, P, D>
where
    R: VerificationRepository,
    P: ProfileRepository,
    D: SmsDispatcher,
{
    pub fn new(
        store: Arc<R>,
        profiles: Arc<P>,
        dispatcher: Arc<D>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            store,
            profiles,
            dispatcher,
            config,
        }
    }

    /// Issue (or reissue) a challenge for an (account, phone) pair
    ///
    /// Generates a fresh passcode, upserts the challenge row (superseding
    /// any prior one), and dispatches the SMS. The store write is
    /// authoritative; delivery is best-effort and a dispatch failure does
    /// not fail the operation.
    pub async fn request_challenge(
        &self,
        account_id: Uuid,
        phone: &str,
    ) -> DomainResult<ChallengeIssued> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(DomainError::Validation {
                message: "Phone number is required".to_string(),
            });
        }
        if self.config.validate_phone_format && !validate_phone(phone, None) {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "phone_format_rejected",
                "Phone number failed the format gate"
            );
            return Err(VerificationError::InvalidPhoneFormat {
                phone: mask_phone_number(phone),
            }
            .into());
        }

        let challenge = PhoneVerification::new_with_expiration(
            account_id,
            phone.to_string(),
            self.config.code_expiration_minutes,
        );

        self.store.upsert_challenge(&challenge).await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            account_id = %account_id,
            event = "otp_issued",
            "Issued verification challenge"
        );

        let message = format!("Tu código de verificación es: {}", challenge.code);
        if let Err(e) = self
            .dispatcher
            .send(phone, &message, SmsCategory::Otp)
            .await
        {
            // The challenge stands even when delivery cannot be confirmed.
            tracing::warn!(
                phone = %mask_phone_number(phone),
                kind = ?e.kind(),
                event = "otp_dispatch_failed",
                "Failed to dispatch verification SMS"
            );
        }

        Ok(ChallengeIssued {
            expires_at: challenge.expires_at,
        })
    }

    /// Validate a submitted passcode against the stored challenge
    ///
    /// Check order is fixed: existence, already-verified (idempotent
    /// success), expiry, attempt ceiling, then comparison. Expiry is
    /// checked before attempt accounting, so expired submissions never
    /// mutate the counter, and the ceiling is checked before comparison,
    /// so the counter never overshoots by more than one.
    pub async fn submit_response(
        &self,
        account_id: Uuid,
        phone: &str,
        code: &str,
    ) -> DomainResult<()> {
        let phone = phone.trim();
        if phone.is_empty() || code.is_empty() {
            return Err(DomainError::Validation {
                message: "Phone and OTP are required".to_string(),
            });
        }

        let challenge = self
            .store
            .find_challenge(account_id, phone)
            .await?
            .ok_or(VerificationError::CodeNotFound)?;

        if challenge.verified {
            // The record is inert after success; resubmission is a no-op.
            tracing::debug!(
                phone = %mask_phone_number(phone),
                account_id = %account_id,
                event = "otp_already_verified",
                "Submission on an already verified challenge"
            );
            return Ok(());
        }

        if challenge.is_expired() {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "otp_expired",
                "Submission on an expired challenge"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if challenge.attempts >= self.config.max_attempts {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                attempts = challenge.attempts,
                event = "otp_attempts_exhausted",
                "Submission past the attempt ceiling"
            );
            return Err(VerificationError::MaxAttemptsExceeded.into());
        }

        if !constant_time_eq(challenge.code.as_bytes(), code.as_bytes()) {
            self.store.record_failed_attempt(account_id, phone).await?;
            tracing::warn!(
                phone = %mask_phone_number(phone),
                attempts = challenge.attempts + 1,
                event = "otp_mismatch",
                "Submitted passcode did not match"
            );
            return Err(VerificationError::InvalidCode.into());
        }

        self.store.mark_verified(account_id, phone).await?;
        self.profiles.mark_phone_verified(account_id, phone).await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            account_id = %account_id,
            event = "otp_verified",
            "Phone successfully verified"
        );

        Ok(())
    }
}
