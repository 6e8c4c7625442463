//! Application factory.
//!
//! Builds the Actix application generic over the repository and
//! dispatcher implementations, so integration tests can run against
//! in-memory mocks while production wires the MySQL and provider-backed
//! versions.

use actix_web::{error::InternalError, web, App, HttpRequest, HttpResponse};
use tracing_actix_web::TracingLogger;

use turno_core::dispatch::SmsDispatcher;
use turno_core::repositories::{ProfileRepository, VerificationRepository};
use turno_shared::ErrorResponse;

use crate::middleware::{cors::create_cors, JwtAuth};
use crate::routes::{send_sms::send_sms, verify_phone::verify_phone, AppState};

/// Creates the application with all routes and middleware wired.
pub fn create_app<R, P, D>(
    app_state: web::Data<AppState<R, P, D>>,
    jwt_secret: String,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody<Error = impl Into<actix_web::Error>>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: VerificationRepository + 'static,
    P: ProfileRepository + 'static,
    D: SmsDispatcher + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("")
                .wrap(JwtAuth::new(jwt_secret))
                .route("/verify-phone", web::post().to(verify_phone::<R, P, D>))
                .route("/send-sms", web::post().to(send_sms::<R, P, D>)),
        )
}

/// Malformed JSON bodies become a 400 with the standard error shape.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new("invalid_request", err.to_string()));
    InternalError::from_response(err, response).into()
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "turno-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
