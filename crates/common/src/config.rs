//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables once at startup
//! and passed by reference to the components that need it. The email and
//! storage crates load their own sections via their `from_env` constructors.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// JWT signing secret and token lifetime
    pub jwt_secret: String,
    pub token_ttl_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .unwrap_or(86_400),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "stonegate=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
