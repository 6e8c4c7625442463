//! Database connection pool management

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;

/// Create the MySQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database connection pool established"
    );

    Ok(pool)
}
