//! Server configuration loaded from environment variables.

use std::env;

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl ServerConfig {
    /// Loads the server configuration from the environment.
    ///
    /// `SERVER_HOST` defaults to `127.0.0.1` and `SERVER_PORT` to `8080`.
    /// `JWT_SECRET` is required.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| "SERVER_PORT must be a valid port number".to_string())?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set".to_string())?;

        Ok(Self {
            host,
            port,
            jwt_secret,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
