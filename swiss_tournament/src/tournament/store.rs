//! Tournament store: the roster, match history, standings and pairings.
//!
//! [`TournamentStore`] abstracts the backing store so the contract can be
//! exercised against a mock in unit tests; [`PgTournamentStore`] is the
//! PostgreSQL implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgConnection;
use sqlx::{Connection, Row};

use super::errors::TournamentResult;
use super::models::{MatchId, MatchRecord, Pairing, Player, PlayerId, Standing};
use super::pairing;
use crate::db::{Database, DatabaseConfig};

/// Operations over a single tournament
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Remove all match records. Every standing drops back to 0/0.
    async fn delete_matches(&self) -> TournamentResult<()>;

    /// Remove all players together with their matches
    async fn delete_players(&self) -> TournamentResult<()>;

    /// Number of registered players
    async fn count_players(&self) -> TournamentResult<i64>;

    /// Register a player and return the store-assigned id.
    ///
    /// Names need not be unique.
    async fn register_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// Find a player by ID
    async fn find_player(&self, player_id: PlayerId) -> TournamentResult<Option<Player>>;

    /// All players with their win records, most wins first.
    ///
    /// Players with equal wins are listed in registration order. Players who
    /// have not played yet are included with 0/0.
    async fn player_standings(&self) -> TournamentResult<Vec<Standing>>;

    /// Record the outcome of a single match.
    ///
    /// # Errors
    ///
    /// Returns `TournamentError::ConstraintViolation` if either id is unknown
    /// or both ids name the same player
    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<MatchId>;

    /// Match history in the order matches were reported
    async fn list_matches(&self) -> TournamentResult<Vec<MatchRecord>>;

    /// Pairings for the next round, see [`pairing::swiss_pairings`].
    ///
    /// # Errors
    ///
    /// Returns `TournamentError::OddPlayerCount` if an odd number of players
    /// is registered
    async fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.player_standings().await?;
        pairing::swiss_pairings(&standings)
    }
}

/// PostgreSQL implementation of `TournamentStore`.
///
/// Each call opens its own connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct PgTournamentStore {
    db: Database,
}

impl PgTournamentStore {
    /// Create a new tournament store
    ///
    /// # Arguments
    ///
    /// * `db` - Handle on the tournament database
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Build a store for the configured connection target
    ///
    /// # Arguments
    ///
    /// * `config` - Database configuration
    ///
    /// # Returns
    ///
    /// * `TournamentResult<PgTournamentStore>` - Store instance or configuration error
    ///
    /// # Errors
    ///
    /// Returns `TournamentError::Config` if the connection URL is malformed
    pub fn from_config(config: &DatabaseConfig) -> TournamentResult<Self> {
        Ok(Self::new(Database::new(config)?))
    }

    /// Get the underlying database handle
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl TournamentStore for PgTournamentStore {
    async fn delete_matches(&self) -> TournamentResult<()> {
        self.db
            .with_connection(|conn| Box::pin(delete_matches(conn)))
            .await
    }

    async fn delete_players(&self) -> TournamentResult<()> {
        self.db
            .with_connection(|conn| Box::pin(delete_players(conn)))
            .await
    }

    async fn count_players(&self) -> TournamentResult<i64> {
        self.db
            .with_connection(|conn| Box::pin(count_players(conn)))
            .await
    }

    async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let name = name.to_string();
        self.db
            .with_connection(move |conn| Box::pin(insert_player(conn, name)))
            .await
    }

    async fn find_player(&self, player_id: PlayerId) -> TournamentResult<Option<Player>> {
        self.db
            .with_connection(move |conn| Box::pin(select_player(conn, player_id)))
            .await
    }

    async fn player_standings(&self) -> TournamentResult<Vec<Standing>> {
        self.db
            .with_connection(|conn| Box::pin(select_standings(conn)))
            .await
    }

    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<MatchId> {
        self.db
            .with_connection(move |conn| Box::pin(insert_match(conn, winner, loser)))
            .await
    }

    async fn list_matches(&self) -> TournamentResult<Vec<MatchRecord>> {
        self.db
            .with_connection(|conn| Box::pin(select_matches(conn)))
            .await
    }
}

async fn delete_matches(conn: &mut PgConnection) -> TournamentResult<()> {
    let result = sqlx::query("DELETE FROM matches").execute(&mut *conn).await?;
    log::info!("Deleted {} matches", result.rows_affected());
    Ok(())
}

async fn delete_players(conn: &mut PgConnection) -> TournamentResult<()> {
    let mut tx = conn.begin().await?;

    // Matches first, so this does not rely on ON DELETE CASCADE.
    let matches = sqlx::query("DELETE FROM matches").execute(&mut *tx).await?;
    let players = sqlx::query("DELETE FROM players").execute(&mut *tx).await?;

    tx.commit().await?;

    log::info!(
        "Deleted {} players and {} matches",
        players.rows_affected(),
        matches.rows_affected()
    );
    Ok(())
}

async fn count_players(conn: &mut PgConnection) -> TournamentResult<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM players")
        .fetch_one(&mut *conn)
        .await?;
    Ok(row.get("count"))
}

async fn insert_player(conn: &mut PgConnection, name: String) -> TournamentResult<PlayerId> {
    let row = sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
        .bind(&name)
        .fetch_one(&mut *conn)
        .await?;

    let player_id: PlayerId = row.get("id");
    log::info!("Registered player {} '{}'", player_id, name);
    Ok(player_id)
}

async fn select_player(
    conn: &mut PgConnection,
    player_id: PlayerId,
) -> TournamentResult<Option<Player>> {
    let row = sqlx::query("SELECT id, name, registered_at FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.map(|r| Player {
        id: r.get("id"),
        name: r.get("name"),
        registered_at: r.get::<DateTime<Utc>, _>("registered_at"),
    }))
}

async fn select_standings(conn: &mut PgConnection) -> TournamentResult<Vec<Standing>> {
    let rows = sqlx::query(
        r#"
        SELECT player_id, name, wins, matches
        FROM standings
        ORDER BY wins DESC, player_id ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    log::debug!("Loaded standings for {} players", rows.len());

    Ok(rows
        .into_iter()
        .map(|r| Standing {
            player_id: r.get("player_id"),
            name: r.get("name"),
            wins: r.get("wins"),
            matches: r.get("matches"),
        })
        .collect())
}

async fn insert_match(
    conn: &mut PgConnection,
    winner: PlayerId,
    loser: PlayerId,
) -> TournamentResult<MatchId> {
    let row = sqlx::query(
        "INSERT INTO matches (winner_id, loser_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(winner)
    .bind(loser)
    .fetch_one(&mut *conn)
    .await?;

    let match_id: MatchId = row.get("id");
    log::info!("Recorded match {}: {} beat {}", match_id, winner, loser);
    Ok(match_id)
}

async fn select_matches(conn: &mut PgConnection) -> TournamentResult<Vec<MatchRecord>> {
    let rows = sqlx::query(
        "SELECT id, winner_id, loser_id, reported_at FROM matches ORDER BY id ASC",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| MatchRecord {
            id: r.get("id"),
            winner_id: r.get("winner_id"),
            loser_id: r.get("loser_id"),
            reported_at: r.get::<DateTime<Utc>, _>("reported_at"),
        })
        .collect())
}
