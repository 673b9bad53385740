//! Database configuration module.
//!
//! Describes the connection target for the tournament database.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Connection string used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/tournament";

/// Statements slower than this are logged at `warn` by default
pub const DEFAULT_SLOW_STATEMENT_MS: u64 = 100;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// Threshold in milliseconds above which statements are logged as slow
    pub slow_statement_threshold_ms: u64,
}

impl DatabaseConfig {
    /// Create a configuration for the given connection URL
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            slow_statement_threshold_ms: DEFAULT_SLOW_STATEMENT_MS,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `DATABASE_URL`: PostgreSQL connection string (default: `postgres://localhost/tournament`)
    /// - `DB_SLOW_STATEMENT_MS`: Slow statement threshold in milliseconds (default: 100)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a numeric variable does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            slow_statement_threshold_ms: parse_env_or(
                "DB_SLOW_STATEMENT_MS",
                DEFAULT_SLOW_STATEMENT_MS,
            )?,
        })
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

/// Read `var` from the environment, falling back to `default` when unset
fn parse_env_or<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(raw) => parse_value(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: var.to_string(),
        reason: format!("{raw:?}: {e}"),
    })
}
