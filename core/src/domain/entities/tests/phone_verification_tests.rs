//! Unit tests for the phone verification entity

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::phone_verification::{
    PhoneVerification, CODE_EXPIRATION_MINUTES, CODE_LENGTH, MAX_ATTEMPTS,
};

#[test]
fn new_challenge_starts_pending() {
    let account_id = Uuid::new_v4();
    let challenge = PhoneVerification::new(account_id, "+15551234567".to_string());

    assert_eq!(challenge.account_id, account_id);
    assert_eq!(challenge.phone, "+15551234567");
    assert_eq!(challenge.attempts, 0);
    assert!(!challenge.verified);
    assert!(!challenge.is_expired());
    assert!(!challenge.attempts_exhausted());
}

#[test]
fn code_is_six_zero_padded_digits() {
    for _ in 0..50 {
        let code = PhoneVerification::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn expiry_is_fifteen_minutes_out() {
    let challenge = PhoneVerification::new(Uuid::new_v4(), "+15551234567".to_string());
    let window = challenge.expires_at - challenge.created_at;
    assert_eq!(window, Duration::minutes(CODE_EXPIRATION_MINUTES));
}

#[test]
fn expired_challenge_reports_expired() {
    let mut challenge = PhoneVerification::new(Uuid::new_v4(), "+15551234567".to_string());
    challenge.expires_at = Utc::now() - Duration::minutes(1);
    assert!(challenge.is_expired());
}

#[test]
fn attempts_ceiling_is_three() {
    let mut challenge = PhoneVerification::new(Uuid::new_v4(), "+15551234567".to_string());
    challenge.attempts = MAX_ATTEMPTS - 1;
    assert!(!challenge.attempts_exhausted());
    challenge.attempts = MAX_ATTEMPTS;
    assert!(challenge.attempts_exhausted());
}

#[test]
fn custom_expiration_window_is_respected() {
    let challenge = PhoneVerification::new_with_expiration(
        Uuid::new_v4(),
        "+15551234567".to_string(),
        1,
    );
    let window = challenge.expires_at - challenge.created_at;
    assert_eq!(window, Duration::minutes(1));
}
