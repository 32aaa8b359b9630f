//! Configuration management.
//!
//! Configuration comes from environment variables (12-factor style), with a
//! `.env` file honored for local development. The loaded `Config` is an
//! explicit value passed into the application state and router — there is no
//! ambient global configuration.
//!
//! ## Environment variables
//! - `HOST`: server bind address (default: 127.0.0.1)
//! - `PORT`: server port (default: 5000)
//! - `DATABASE_URL`: SQLite connection string
//! - `SESSION_COOKIE_NAME`: name of the session cookie
//! - `SESSION_SECURE`: set the cookie's Secure flag (true behind TLS)
//! - `SESSION_TTL_MINUTES`: session time-to-live
//! - `SESSION_SWEEP_SECS`: interval of the expired-session sweep
//! - `BCRYPT_COST`: bcrypt cost factor for password hashing

use anyhow::Result;
use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to.
    pub host: String,

    /// Server port number.
    pub port: u16,

    /// SQLite database connection URL.
    /// Format: "sqlite:filename.db?mode=rwc" (read, write, create).
    pub database_url: String,

    /// Name of the session-id cookie.
    pub session_cookie_name: String,

    /// Whether the session cookie carries the Secure attribute.
    /// Must be true in production over HTTPS; false for plain-HTTP dev.
    pub session_secure: bool,

    /// Session time-to-live in minutes. The cookie and the stored record
    /// are refreshed with this TTL on every request that touches the session.
    pub session_ttl_minutes: i64,

    /// How often the background sweep deletes expired session rows.
    pub session_sweep_secs: u64,

    /// bcrypt cost factor. Higher is slower and more brute-force resistant.
    /// Tests lower this to keep hashing fast.
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults suitable for local development.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (dotenvy doesn't error if missing)
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:auth.db?mode=rwc".to_string()),

            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "cookieMonster".to_string()),

            session_secure: env::var("SESSION_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),

            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| "15".to_string())
                .parse()?,

            session_sweep_secs: env::var("SESSION_SWEEP_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()?,

            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| "12".to_string())
                .parse()?,
        })
    }

    /// Socket address for the TCP listener, e.g. "127.0.0.1:5000".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
