//! Tournament module for a single Swiss-system tournament.
//!
//! This module provides:
//! - Player registration and bulk removal
//! - Match reporting and match history
//! - Standings derived from the match history
//! - Next-round pairing by adjacent rank
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::DatabaseConfig;
//! use swiss_tournament::tournament::{PgTournamentStore, TournamentStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PgTournamentStore::from_config(&DatabaseConfig::from_env()?)?;
//!
//!     let alice = store.register_player("Alice").await?;
//!     let bob = store.register_player("Bob").await?;
//!     store.report_match(alice, bob).await?;
//!
//!     for pairing in store.swiss_pairings().await? {
//!         println!("{} vs {}", pairing.name1, pairing.name2);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod models;
pub mod pairing;
pub mod store;

pub use errors::{ConstraintKind, TournamentError, TournamentResult};
pub use models::{MatchId, MatchRecord, Pairing, Player, PlayerId, Standing};
pub use pairing::swiss_pairings;
pub use store::{PgTournamentStore, TournamentStore};
