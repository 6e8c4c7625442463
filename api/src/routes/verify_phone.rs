//! `POST /verify-phone` handler.
//!
//! One endpoint, two actions selected by the request body: `request`
//! issues and delivers a fresh code, `verify` checks a submitted one.

use actix_web::{web, HttpResponse};
use turno_core::dispatch::SmsDispatcher;
use turno_core::repositories::{ProfileRepository, VerificationRepository};
use turno_shared::phone::mask_phone_number;
use turno_shared::ApiResponse;

use crate::dto::{VerifyPhoneRequest, VerifyPhoneResponse};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

pub async fn verify_phone<R, P, D>(
    auth: AuthContext,
    state: web::Data<AppState<R, P, D>>,
    body: web::Json<VerifyPhoneRequest>,
) -> HttpResponse
where
    R: VerificationRepository + 'static,
    P: ProfileRepository + 'static,
    D: SmsDispatcher + 'static,
{
    match body.into_inner() {
        VerifyPhoneRequest::Request { phone } => {
            match state
                .verification_service
                .request_challenge(auth.account_id, &phone)
                .await
            {
                Ok(_issued) => {
                    tracing::info!(
                        event = "verify_phone_requested",
                        account_id = %auth.account_id,
                        phone = %mask_phone_number(&phone),
                    );
                    HttpResponse::Ok()
                        .json(ApiResponse::success(VerifyPhoneResponse::new("OTP sent")))
                }
                Err(e) => domain_error_response(&e),
            }
        }
        VerifyPhoneRequest::Verify { phone, otp } => {
            match state
                .verification_service
                .submit_response(auth.account_id, &phone, &otp)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        event = "verify_phone_confirmed",
                        account_id = %auth.account_id,
                        phone = %mask_phone_number(&phone),
                    );
                    HttpResponse::Ok().json(ApiResponse::success(VerifyPhoneResponse::new(
                        "Phone verified successfully",
                    )))
                }
                Err(e) => domain_error_response(&e),
            }
        }
    }
}
