//! Swiss pairing by adjacent rank.
//!
//! Players are ordered by wins ascending and consecutive entries are paired:
//! positions (0, 1), (2, 3) and so on. Players sharing a win count keep
//! registration order (player id ascending), so the same standings always
//! produce the same pairings.

use super::errors::{TournamentError, TournamentResult};
use super::models::{Pairing, Standing};

/// Compute next-round pairings from the current standings.
///
/// The input may be in any order.
///
/// # Errors
///
/// Returns `TournamentError::OddPlayerCount` if `standings` has odd length
pub fn swiss_pairings(standings: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let mut ranked: Vec<&Standing> = standings.iter().collect();
    ranked.sort_by_key(|s| (s.wins, s.player_id));

    Ok(ranked
        .chunks_exact(2)
        .map(|pair| Pairing::between(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn standing(player_id: i64, name: &str, wins: i64, matches: i64) -> Standing {
        Standing {
            player_id,
            name: name.to_string(),
            wins,
            matches,
        }
    }

    #[test]
    fn test_empty_roster_has_no_pairings() {
        let pairings = swiss_pairings(&[]).unwrap();
        assert!(pairings.is_empty());
    }

    #[test]
    fn test_odd_roster_is_rejected() {
        let standings = vec![
            standing(1, "A", 0, 0),
            standing(2, "B", 0, 0),
            standing(3, "C", 0, 0),
        ];

        match swiss_pairings(&standings) {
            Err(TournamentError::OddPlayerCount(n)) => assert_eq!(n, 3),
            other => panic!("Expected OddPlayerCount, got {other:?}"),
        }
    }

    #[test]
    fn test_first_round_pairs_in_registration_order() {
        let standings = vec![
            standing(4, "D", 0, 0),
            standing(1, "A", 0, 0),
            standing(3, "C", 0, 0),
            standing(2, "B", 0, 0),
        ];

        let pairings = swiss_pairings(&standings).unwrap();

        assert_eq!(pairings.len(), 2);
        assert_eq!((pairings[0].id1, pairings[0].id2), (1, 2));
        assert_eq!((pairings[1].id1, pairings[1].id2), (3, 4));
    }

    #[test]
    fn test_pairs_players_with_equal_wins() {
        // A beat B, C beat D
        let standings = vec![
            standing(1, "A", 1, 1),
            standing(3, "C", 1, 1),
            standing(2, "B", 0, 1),
            standing(4, "D", 0, 1),
        ];

        let pairings = swiss_pairings(&standings).unwrap();

        assert_eq!(pairings.len(), 2);
        assert_eq!(
            pairings[0],
            Pairing {
                id1: 2,
                name1: "B".to_string(),
                id2: 4,
                name2: "D".to_string(),
            }
        );
        assert_eq!(
            pairings[1],
            Pairing {
                id1: 1,
                name1: "A".to_string(),
                id2: 3,
                name2: "C".to_string(),
            }
        );
    }

    #[test]
    fn test_uneven_groups_spill_into_neighbour() {
        // Three players on one win, one on zero: the lone zero-win player
        // meets the lowest-id one-win player.
        let standings = vec![
            standing(1, "A", 1, 1),
            standing(2, "B", 1, 1),
            standing(3, "C", 1, 1),
            standing(4, "D", 0, 1),
            standing(5, "E", 2, 2),
            standing(6, "F", 2, 2),
        ];

        let pairings = swiss_pairings(&standings).unwrap();
        let ids: Vec<(i64, i64)> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(ids, vec![(4, 1), (2, 3), (5, 6)]);
    }

    #[test]
    fn test_every_player_appears_once() {
        let standings: Vec<Standing> = (1..=16)
            .map(|id| standing(id, &format!("P{id}"), id % 4, 3))
            .collect();

        let pairings = swiss_pairings(&standings).unwrap();
        assert_eq!(pairings.len(), 8);

        let mut seen = HashSet::new();
        for pairing in &pairings {
            assert_ne!(pairing.id1, pairing.id2);
            assert!(seen.insert(pairing.id1));
            assert!(seen.insert(pairing.id2));
        }
        assert_eq!(seen.len(), 16);

        for id in 1..=16 {
            let seats = pairings.iter().filter(|p| p.involves(id)).count();
            assert_eq!(seats, 1, "player {id} should sit in exactly one pairing");
        }
    }
}
