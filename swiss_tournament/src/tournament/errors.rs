//! Tournament error types.

use crate::db::ConfigError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Kind of integrity constraint rejected by the database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A referenced player does not exist
    ForeignKey,
    /// A value that must be unique already exists
    Unique,
    /// A row-level check failed (e.g. a player matched against themself)
    Check,
    /// A required column was null
    NotNull,
}

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The backing store could not be reached
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// The database rejected a write because it violates an integrity constraint
    #[error("Constraint violation ({kind:?}): {message}")]
    ConstraintViolation {
        kind: ConstraintKind,
        constraint: Option<String>,
        message: String,
    },

    /// Swiss pairing needs an even roster
    #[error("Cannot pair an odd number of players: {0}")]
    OddPlayerCount(usize),

    /// Invalid connection target or environment value
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl TournamentError {
    /// The violated constraint kind, if this is a constraint error
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            TournamentError::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for TournamentError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let kind = match db_err.kind() {
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                _ => None,
            };

            if let Some(kind) = kind {
                return TournamentError::ConstraintViolation {
                    kind,
                    constraint: db_err.constraint().map(str::to_string),
                    message: db_err.message().to_string(),
                };
            }
        }

        TournamentError::Database(err)
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
