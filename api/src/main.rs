use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use turno_api::app::create_app;
use turno_api::config::ServerConfig;
use turno_api::routes::AppState;
use turno_core::services::verification::{VerificationService, VerificationServiceConfig};
use turno_infra::database::connection::create_pool;
use turno_infra::database::mysql::{MySqlProfileRepository, MySqlVerificationRepository};
use turno_infra::sms::create_dispatcher;
use turno_infra::{DatabaseConfig, SmsConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let db_config = DatabaseConfig::from_env();
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e))?;
    tracing::info!(event = "database_connected");

    let sms_config = SmsConfig::from_env();
    let dispatcher = match create_dispatcher(&sms_config) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            // A broken provider setup should not keep the service down;
            // verification still works with delivery degraded to a no-op.
            tracing::warn!(event = "sms_provider_fallback", error = %e);
            create_dispatcher(&SmsConfig::mock())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        }
    };
    let dispatcher = Arc::new(dispatcher);

    let verification_repository = Arc::new(MySqlVerificationRepository::new(pool.clone()));
    let profile_repository = Arc::new(MySqlProfileRepository::new(pool));

    let verification_service = Arc::new(VerificationService::new(
        verification_repository,
        profile_repository,
        Arc::clone(&dispatcher),
        VerificationServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState::new(verification_service, dispatcher));
    let jwt_secret = server_config.jwt_secret.clone();
    let bind_address = server_config.bind_address();

    tracing::info!(event = "server_starting", address = %bind_address);

    HttpServer::new(move || create_app(app_state.clone(), jwt_secret.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
