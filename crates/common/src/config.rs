//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Shared secret used to sign access and refresh credentials
    pub auth_secret: String,

    /// Whether the refresh cookie carries the `Secure` attribute
    pub cookie_secure: bool,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[redacted]")
            .field("auth_secret", &"[redacted]")
            .field("cookie_secure", &self.cookie_secure)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_secret = lookup("AUTH_SECRET")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("AUTH_SECRET is required"))?;

        let config = Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?,
            auth_secret,
            cookie_secure: lookup("COOKIE_SECURE")
                .map(|value| !matches!(value.as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "pulsefit=debug".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
