// config.rs

use deadpool_postgres::SslMode;
use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric variable holds something that is not a number in range
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },

    /// DB_SSL_MODE is not one of disable, prefer, require
    #[error("Unsupported DB_SSL_MODE: {0}")]
    UnsupportedSslMode(String),
}

/// Connection settings for PostgreSQL
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: SslMode,
    pub max_connections: usize,
    /// Pooled connections older than this are closed instead of reused
    pub conn_max_lifetime: Duration,
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Unset or empty values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            port: parse_number("APP_PORT", get("APP_PORT", "8080"))?,
            database: DatabaseConfig {
                host: get("DB_HOST", "localhost"),
                port: parse_number("DB_PORT", get("DB_PORT", "5432"))?,
                user: get("DB_USER", "chat_user"),
                password: get("DB_PASSWORD", "chat_password"),
                name: get("DB_NAME", "chat_db"),
                ssl_mode: parse_ssl_mode(&get("DB_SSL_MODE", "disable"))?,
                max_connections: parse_number(
                    "DB_MAX_CONNECTIONS",
                    get("DB_MAX_CONNECTIONS", "100"),
                )?,
                conn_max_lifetime: Duration::from_secs(parse_number(
                    "DB_CONN_MAX_LIFETIME_SECS",
                    get("DB_CONN_MAX_LIFETIME_SECS", "3600"),
                )?),
            },
        })
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}

fn parse_ssl_mode(value: &str) -> Result<SslMode, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "disable" => Ok(SslMode::Disable),
        "prefer" => Ok(SslMode::Prefer),
        "require" => Ok(SslMode::Require),
        other => Err(ConfigError::UnsupportedSslMode(other.to_string())),
    }
}
