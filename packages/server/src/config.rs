use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Sessions older than this many hours fail with `SessionExpired`.
    pub session_ttl_hours: i64,
    /// Bootstrap admin account, created at startup if not already registered.
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .context("SESSION_TTL_HOURS must be a valid number")?,
            admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@neighbornews.local".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?,
        })
    }
}
