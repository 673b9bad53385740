//! Tournament data models for players, matches, standings and pairings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// Match ID type
pub type MatchId = i64;

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Store-assigned unique identifier
    pub id: PlayerId,
    /// Full name as registered (need not be unique)
    pub name: String,
    /// When the player was registered
    pub registered_at: DateTime<Utc>,
}

/// A single reported match outcome.
///
/// Matches are append-only; once recorded they are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub reported_at: DateTime<Utc>,
}

/// A player's win record, derived from the match history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    /// Matches won
    pub wins: i64,
    /// Matches played, always `>= wins`
    pub matches: i64,
}

impl Standing {
    /// Create a standing for a player who has not played yet
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins: 0,
            matches: 0,
        }
    }

    /// Matches lost
    pub fn losses(&self) -> i64 {
        self.matches - self.wins
    }
}

/// Two players drawn to face each other in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    /// Pair two standings, first argument becomes the first seat
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.player_id,
            name1: first.name.clone(),
            id2: second.player_id,
            name2: second.name.clone(),
        }
    }

    /// Whether the given player sits in this pairing
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.id1 == player_id || self.id2 == player_id
    }
}
