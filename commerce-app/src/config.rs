//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub order_service_url: String,
    pub order_timeout_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let order_service_url = env::var("ORDER_SERVICE_URL")
            .map_err(|_| anyhow::anyhow!("ORDER_SERVICE_URL environment variable is required"))?;

        let order_timeout_ms = env::var("ORDER_SERVICE_TIMEOUT_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse()?;

        Ok(Self {
            port,
            database_url,
            order_service_url,
            order_timeout_ms,
        })
    }
}
