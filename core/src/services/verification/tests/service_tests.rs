//! Unit tests for the verification service state machine

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::dispatch::SmsCategory;
use crate::domain::entities::phone_verification::{CODE_EXPIRATION_MINUTES, CODE_LENGTH};
use crate::errors::{DomainError, VerificationError};
use crate::repositories::{MockProfileRepository, MockVerificationRepository};
use crate::services::verification::{VerificationService, VerificationServiceConfig};

use super::mocks::MockDispatcher;

type TestService =
    VerificationService<MockVerificationRepository, MockProfileRepository, MockDispatcher>;

struct Fixture {
    service: TestService,
    store: Arc<MockVerificationRepository>,
    profiles: Arc<MockProfileRepository>,
    dispatcher: Arc<MockDispatcher>,
}

fn fixture() -> Fixture {
    fixture_with(
        MockVerificationRepository::new(),
        MockDispatcher::new(false),
        VerificationServiceConfig::default(),
    )
}

fn fixture_with(
    store: MockVerificationRepository,
    dispatcher: MockDispatcher,
    config: VerificationServiceConfig,
) -> Fixture {
    let store = Arc::new(store);
    let profiles = Arc::new(MockProfileRepository::new());
    let dispatcher = Arc::new(dispatcher);
    let service = VerificationService::new(
        store.clone(),
        profiles.clone(),
        dispatcher.clone(),
        config,
    );
    Fixture {
        service,
        store,
        profiles,
        dispatcher,
    }
}

/// A code guaranteed to differ from the stored one
fn wrong_code(code: &str) -> String {
    let first = code.as_bytes()[0];
    let flipped = if first == b'9' { b'0' } else { first + 1 };
    let mut wrong = String::with_capacity(code.len());
    wrong.push(flipped as char);
    wrong.push_str(&code[1..]);
    wrong
}

const PHONE: &str = "+15551234567";

#[tokio::test]
async fn request_issues_six_digit_code_with_fifteen_minute_expiry() {
    let f = fixture();
    let account_id = Uuid::new_v4();

    let result = f.service.request_challenge(account_id, PHONE).await.unwrap();

    let stored = f.store.stored_challenge(account_id, PHONE).unwrap();
    assert_eq!(stored.code.len(), CODE_LENGTH);
    assert!(stored.code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(stored.attempts, 0);
    assert!(!stored.verified);
    assert_eq!(
        stored.expires_at - stored.created_at,
        Duration::minutes(CODE_EXPIRATION_MINUTES)
    );
    assert_eq!(result.expires_at, stored.expires_at);
}

#[tokio::test]
async fn request_dispatches_otp_sms_embedding_the_code() {
    let f = fixture();
    let account_id = Uuid::new_v4();

    f.service.request_challenge(account_id, PHONE).await.unwrap();

    let stored = f.store.stored_challenge(account_id, PHONE).unwrap();
    let message = f.dispatcher.last_message_for(PHONE).unwrap();
    assert!(message.contains(&stored.code));
    let sent = f.dispatcher.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].2, SmsCategory::Otp);
}

#[tokio::test]
async fn request_rejects_empty_phone() {
    let f = fixture();

    let result = f.service.request_challenge(Uuid::new_v4(), "   ").await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert_eq!(f.dispatcher.sent_count(), 0);
}

#[tokio::test]
async fn request_rejects_malformed_phone_when_gate_enabled() {
    let f = fixture();

    let result = f.service.request_challenge(Uuid::new_v4(), "not-a-phone").await;

    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::InvalidPhoneFormat { .. }
        ))
    ));
    assert_eq!(f.dispatcher.sent_count(), 0);
}

#[tokio::test]
async fn request_skips_format_gate_when_disabled() {
    let config = VerificationServiceConfig {
        validate_phone_format: false,
        ..Default::default()
    };
    let f = fixture_with(
        MockVerificationRepository::new(),
        MockDispatcher::new(false),
        config,
    );

    // Matches the platform's historical behaviour of trusting the client gate.
    let result = f.service.request_challenge(Uuid::new_v4(), "not-a-phone").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn dispatch_failure_does_not_fail_the_request() {
    let f = fixture_with(
        MockVerificationRepository::new(),
        MockDispatcher::new(true),
        VerificationServiceConfig::default(),
    );
    let account_id = Uuid::new_v4();

    let result = f.service.request_challenge(account_id, PHONE).await;

    assert!(result.is_ok());
    assert!(f.store.stored_challenge(account_id, PHONE).is_some());
}

#[tokio::test]
async fn store_failure_fails_the_request_before_any_dispatch() {
    let f = fixture_with(
        MockVerificationRepository::failing(),
        MockDispatcher::new(false),
        VerificationServiceConfig::default(),
    );

    let result = f.service.request_challenge(Uuid::new_v4(), PHONE).await;

    assert!(matches!(result, Err(DomainError::Store { .. })));
    assert_eq!(f.dispatcher.sent_count(), 0);
}

#[tokio::test]
async fn submit_without_challenge_reports_not_found() {
    let f = fixture();

    let result = f
        .service
        .submit_response(Uuid::new_v4(), PHONE, "123456")
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::CodeNotFound))
    ));
}

#[tokio::test]
async fn submit_rejects_empty_code() {
    let f = fixture();

    let result = f.service.submit_response(Uuid::new_v4(), PHONE, "").await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn wrong_code_increments_attempts_by_exactly_one() {
    let f = fixture();
    let account_id = Uuid::new_v4();
    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;

    let result = f
        .service
        .submit_response(account_id, PHONE, &wrong_code(&code))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::InvalidCode))
    ));
    assert_eq!(f.store.stored_challenge(account_id, PHONE).unwrap().attempts, 1);
}

#[tokio::test]
async fn correct_code_verifies_and_propagates_to_profile() {
    let f = fixture();
    let account_id = Uuid::new_v4();
    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;

    f.service.submit_response(account_id, PHONE, &code).await.unwrap();

    let stored = f.store.stored_challenge(account_id, PHONE).unwrap();
    assert!(stored.verified);
    assert_eq!(f.profiles.verified_phone(account_id).as_deref(), Some(PHONE));
}

#[tokio::test]
async fn resubmission_after_success_is_idempotent() {
    let f = fixture();
    let account_id = Uuid::new_v4();
    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;
    f.service.submit_response(account_id, PHONE, &code).await.unwrap();

    // Same code again: no error, no attempt accounting.
    f.service.submit_response(account_id, PHONE, &code).await.unwrap();
    // Even a wrong code is a no-op once the record is verified.
    f.service
        .submit_response(account_id, PHONE, &wrong_code(&code))
        .await
        .unwrap();

    let stored = f.store.stored_challenge(account_id, PHONE).unwrap();
    assert!(stored.verified);
    assert_eq!(stored.attempts, 0);
}

#[tokio::test]
async fn expired_challenge_rejects_correct_code_without_mutating_attempts() {
    let f = fixture();
    let account_id = Uuid::new_v4();
    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;

    // Simulate a 16 minute wait.
    f.store
        .set_expiry(account_id, PHONE, Utc::now() - Duration::minutes(1));

    let result = f.service.submit_response(account_id, PHONE, &code).await;

    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::CodeExpired))
    ));
    assert_eq!(f.store.stored_challenge(account_id, PHONE).unwrap().attempts, 0);
}

#[tokio::test]
async fn fourth_submission_hits_the_ceiling_even_with_the_correct_code() {
    let f = fixture();
    let account_id = Uuid::new_v4();
    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;
    let bad = wrong_code(&code);

    for expected_attempts in 1..=3 {
        let result = f.service.submit_response(account_id, PHONE, &bad).await;
        assert!(matches!(
            result,
            Err(DomainError::Verification(VerificationError::InvalidCode))
        ));
        assert_eq!(
            f.store.stored_challenge(account_id, PHONE).unwrap().attempts,
            expected_attempts
        );
    }

    // Ceiling reached: no comparison, no further increment.
    let result = f.service.submit_response(account_id, PHONE, &code).await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::MaxAttemptsExceeded
        ))
    ));
    assert_eq!(f.store.stored_challenge(account_id, PHONE).unwrap().attempts, 3);
}

#[tokio::test]
async fn rerequest_fully_resets_a_failed_challenge() {
    let f = fixture();
    let account_id = Uuid::new_v4();
    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;
    let bad = wrong_code(&code);
    for _ in 0..3 {
        let _ = f.service.submit_response(account_id, PHONE, &bad).await;
    }
    let old = f.store.stored_challenge(account_id, PHONE).unwrap();
    assert_eq!(old.attempts, 3);

    f.service.request_challenge(account_id, PHONE).await.unwrap();

    let fresh = f.store.stored_challenge(account_id, PHONE).unwrap();
    assert_eq!(fresh.attempts, 0);
    assert!(!fresh.verified);
    assert!(fresh.expires_at >= old.expires_at);
}

#[tokio::test]
async fn wrong_then_right_scenario() {
    let f = fixture();
    let account_id = Uuid::new_v4();
    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;

    let result = f
        .service
        .submit_response(account_id, PHONE, &wrong_code(&code))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::InvalidCode))
    ));
    assert_eq!(f.store.stored_challenge(account_id, PHONE).unwrap().attempts, 1);

    f.service.submit_response(account_id, PHONE, &code).await.unwrap();
    assert!(f.store.stored_challenge(account_id, PHONE).unwrap().verified);

    // Resubmitting the correct code must neither error nor re-increment.
    f.service.submit_response(account_id, PHONE, &code).await.unwrap();
    assert_eq!(f.store.stored_challenge(account_id, PHONE).unwrap().attempts, 1);
}

#[tokio::test]
async fn configured_attempt_ceiling_overrides_the_default() {
    let config = VerificationServiceConfig {
        max_attempts: 1,
        ..Default::default()
    };
    let f = fixture_with(
        MockVerificationRepository::new(),
        MockDispatcher::new(false),
        config,
    );
    let account_id = Uuid::new_v4();

    f.service.request_challenge(account_id, PHONE).await.unwrap();
    let code = f.store.stored_challenge(account_id, PHONE).unwrap().code;

    let result = f
        .service
        .submit_response(account_id, PHONE, &wrong_code(&code))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::InvalidCode))
    ));

    // One failure exhausts a ceiling of one; even the correct code is refused.
    let result = f.service.submit_response(account_id, PHONE, &code).await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::MaxAttemptsExceeded
        ))
    ));
    assert_eq!(f.store.stored_challenge(account_id, PHONE).unwrap().attempts, 1);
}

#[tokio::test]
async fn challenges_are_isolated_per_account_and_phone() {
    let f = fixture();
    let account_a = Uuid::new_v4();
    let account_b = Uuid::new_v4();
    f.service.request_challenge(account_a, PHONE).await.unwrap();

    // The same phone under another account has no challenge yet.
    let result = f.service.submit_response(account_b, PHONE, "123456").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::CodeNotFound))
    ));

    // A second phone under the same account is its own record.
    f.service
        .request_challenge(account_a, "+15559876543")
        .await
        .unwrap();
    let first = f.store.stored_challenge(account_a, PHONE).unwrap();
    let second = f.store.stored_challenge(account_a, "+15559876543").unwrap();
    assert_eq!(first.phone, PHONE);
    assert_eq!(second.phone, "+15559876543");
}
