//! # Swiss Tournament
//!
//! Player roster, match history and round pairing for a Swiss-system
//! tournament, stored in PostgreSQL.
//!
//! Standings are never stored: they are derived from the append-only match
//! history by the `standings` view, so a reported match is reflected in both
//! players' records at once.
//!
//! ## Core Modules
//!
//! - [`db`]: Connection target configuration and per-call connections
//! - [`tournament`]: The tournament store, its models and the pairing pass
//!
//! ## Example
//!
//! ```
//! use swiss_tournament::{Standing, swiss_pairings};
//!
//! let standings = vec![Standing::new(1, "Alice"), Standing::new(2, "Bob")];
//! let pairings = swiss_pairings(&standings).unwrap();
//! assert_eq!(pairings[0].name1, "Alice");
//! ```

/// Database connection handling.
pub mod db;

/// Tournament store, models and pairing.
pub mod tournament;
pub use tournament::{
    ConstraintKind, MatchId, MatchRecord, Pairing, PgTournamentStore, Player, PlayerId, Standing,
    TournamentError, TournamentResult, TournamentStore, swiss_pairings,
};
