// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Random pot drills.
use log::debug;
use rand::{Rng, seq::IndexedRandom, seq::SliceRandom};

use dealer_core::{Chips, PlayerId, seat_name};

use crate::pots::PotPlayer;

/// The bets players can go all-in for.
pub const BET_DENOMINATIONS: [Chips; 5] = [
    Chips::new(1_000),
    Chips::new(2_000),
    Chips::new(3_000),
    Chips::new(4_000),
    Chips::new(5_000),
];

/// The minimum number of players in a drill.
pub const MIN_PLAYERS: usize = 3;

/// The maximum number of players in a drill.
pub const MAX_PLAYERS: usize = 5;

/// The probability that two players finish with the same rank.
const TIE_PROBABILITY: f64 = 0.3;

/// Generates a random set of all-in players.
///
/// Each player bets one of the [BET_DENOMINATIONS] and gets a distinct rank
/// from 1 to the number of players, except that with a 30% probability two
/// adjacent ranks are merged into a tie. Ranks are then shuffled across seats.
pub fn generate_scenario<R: Rng + ?Sized>(rng: &mut R) -> Vec<PotPlayer> {
    let num_players = rng.random_range(MIN_PLAYERS..=MAX_PLAYERS);

    let mut ranks = (1..=num_players as u32).collect::<Vec<_>>();
    if rng.random_bool(TIE_PROBABILITY) {
        let tie_at = rng.random_range(1..num_players);
        ranks[tie_at] = ranks[tie_at - 1];
    }
    ranks.shuffle(rng);

    let players = ranks
        .into_iter()
        .enumerate()
        .map(|(seat, rank)| {
            let bet = BET_DENOMINATIONS
                .choose(rng)
                .copied()
                .unwrap_or(BET_DENOMINATIONS[0]);
            PotPlayer::new(PlayerId::from_seat(seat), seat_name(seat), bet, rank)
        })
        .collect::<Vec<_>>();

    debug!(
        "Generated pot scenario {:?}",
        players
            .iter()
            .map(|p| (p.id.get(), p.bet.amount(), p.rank))
            .collect::<Vec<_>>()
    );

    players
}

/// Returns the label shown for a player rank given all players ranks.
pub fn rank_label(rank: u32, all_ranks: &[u32]) -> String {
    if rank == 1 {
        let count = all_ranks.iter().filter(|&&r| r == 1).count();
        return if count > 1 {
            "1st (tie)".to_string()
        } else {
            "1st (winner)".to_string()
        };
    }

    if all_ranks.iter().max() == Some(&rank) {
        return "Last".to_string();
    }

    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    format!("{rank}{suffix}")
}
