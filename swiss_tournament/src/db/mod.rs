//! Database module providing per-call PostgreSQL connections.
//!
//! Every store operation opens its own connection, runs its statements and
//! closes the connection again, whether the statements succeeded or not.

use futures_util::future::BoxFuture;
use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use std::time::Duration;

use crate::tournament::{TournamentError, TournamentResult};

pub mod config;

pub use config::{ConfigError, DatabaseConfig};

/// Handle on the tournament database.
///
/// Holds the parsed connection target only; no connection stays open between
/// calls.
#[derive(Debug, Clone)]
pub struct Database {
    options: PgConnectOptions,
}

impl Database {
    /// Create a database handle from configuration
    ///
    /// The connection URL is parsed eagerly but no connection is made.
    ///
    /// # Arguments
    ///
    /// * `config` - Database configuration
    ///
    /// # Returns
    ///
    /// * `TournamentResult<Database>` - Database handle or configuration error
    ///
    /// # Errors
    ///
    /// Returns `TournamentError::Config` if the URL is malformed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiss_tournament::db::{Database, DatabaseConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), swiss_tournament::TournamentError> {
    ///     let config = DatabaseConfig::from_env()?;
    ///     let db = Database::new(&config)?;
    ///     db.health_check().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn new(config: &DatabaseConfig) -> TournamentResult<Self> {
        let options = PgConnectOptions::from_str(&config.database_url)
            .map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL".to_string(),
                reason: e.to_string(),
            })?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_statement_threshold_ms),
            );

        Ok(Self { options })
    }

    /// Open a new connection to the tournament database
    ///
    /// # Returns
    ///
    /// * `TournamentResult<PgConnection>` - Open connection; pass it to [`Database::release`] when done
    ///
    /// # Errors
    ///
    /// Returns `TournamentError::Connection` if the database is unreachable
    pub async fn connect(&self) -> TournamentResult<PgConnection> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                log::error!("Failed to connect to tournament database: {}", e);
                TournamentError::Connection(e)
            })
    }

    /// Close a connection obtained from [`Database::connect`]
    pub async fn release(&self, conn: PgConnection) {
        if let Err(e) = conn.close().await {
            log::warn!("Failed to close tournament database connection: {}", e);
        }
    }

    /// Run `op` on a fresh connection and close it afterwards.
    ///
    /// The connection is released on success and on error alike; the result
    /// of `op` is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `op` - Statements to run, given the borrowed connection
    ///
    /// # Returns
    ///
    /// * `TournamentResult<T>` - The result of `op`
    ///
    /// # Errors
    ///
    /// Returns `TournamentError::Connection` if no connection could be opened,
    /// otherwise whatever `op` returns
    pub async fn with_connection<T, F>(&self, op: F) -> TournamentResult<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, TournamentResult<T>> + Send,
    {
        let mut conn = self.connect().await?;
        let result = op(&mut conn).await;
        self.release(conn).await;
        result
    }

    /// Check if the database is reachable
    ///
    /// # Returns
    ///
    /// * `TournamentResult<()>` - Ok if healthy, error otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if no connection could be made or `SELECT 1` fails
    pub async fn health_check(&self) -> TournamentResult<()> {
        self.with_connection(|conn| Box::pin(ping(conn))).await
    }
}

async fn ping(conn: &mut PgConnection) -> TournamentResult<()> {
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}
