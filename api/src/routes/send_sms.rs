//! `POST /send-sms` handler.
//!
//! Thin pass-through to the configured SMS dispatcher, used by internal
//! services for booking notifications and reminders. Delivery failures
//! surface as an opaque 500; the provider response never reaches the
//! client.

use actix_web::{web, HttpResponse};
use turno_core::dispatch::SmsDispatcher;
use turno_core::repositories::{ProfileRepository, VerificationRepository};
use turno_shared::phone::mask_phone_number;
use turno_shared::{ApiResponse, ErrorResponse};

use crate::dto::{SendSmsRequest, SendSmsResponse};
use crate::routes::AppState;

pub async fn send_sms<R, P, D>(
    state: web::Data<AppState<R, P, D>>,
    body: web::Json<SendSmsRequest>,
) -> HttpResponse
where
    R: VerificationRepository + 'static,
    P: ProfileRepository + 'static,
    D: SmsDispatcher + 'static,
{
    let request = body.into_inner();
    let to = request.to.trim();
    let message = request.message.trim();

    if to.is_empty() || message.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "Missing required fields: to, message",
        ));
    }

    match state.sms_dispatcher.send(to, message, request.category).await {
        Ok(()) => {
            tracing::info!(
                event = "sms_requested",
                to = %mask_phone_number(to),
                category = request.category.as_str(),
            );
            HttpResponse::Ok().json(ApiResponse::success(SendSmsResponse {
                category: request.category,
            }))
        }
        Err(e) => {
            tracing::error!(
                event = "sms_request_failed",
                to = %mask_phone_number(to),
                category = request.category.as_str(),
                kind = ?e.kind(),
            );
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("delivery_failed", e.to_string()))
        }
    }
}
