// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Main pot and side pots computation and payouts.
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use dealer_core::{Chips, PlayerId};

/// A player that contributed to the pot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotPlayer {
    /// The player id.
    pub id: PlayerId,
    /// The player display name.
    pub name: String,
    /// The total amount bet by this player, a zero bet is not in any pot.
    pub bet: Chips,
    /// The player finishing rank, 1 is the best and tied players share a rank.
    pub rank: u32,
    /// The player is all-in for the bet amount.
    pub is_all_in: bool,
}

impl PotPlayer {
    /// Creates an all-in player.
    ///
    /// Panics if rank is zero.
    pub fn new(id: PlayerId, name: impl Into<String>, bet: Chips, rank: u32) -> Self {
        assert!(rank >= 1, "Player ranks start from 1");
        Self {
            id,
            name: name.into(),
            bet,
            rank,
            is_all_in: true,
        }
    }

    fn is_active(&self) -> bool {
        self.bet > Chips::ZERO
    }
}

/// A main pot or side pot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotStage {
    /// The pot name, `Main Pot` or `Side Pot N`.
    pub name: String,
    /// The chips in this pot.
    pub amount: Chips,
    /// The players that can win this pot, in players order.
    pub eligible_player_ids: Vec<PlayerId>,
}

/// Computes the main pot and the side pots for the given players.
///
/// Each distinct bet amount is a pot floor, the pot for a floor collects from
/// every player the part of the bet between the previous floor and this floor.
/// A pot is created only if it has chips and at least two players are eligible
/// for it, so the unmatched part of the biggest bet is not in any pot (see
/// [uncontested_excess]).
///
/// Pots are returned from the lowest to the highest floor.
///
/// Panics if players is empty.
pub fn compute_pots(players: &[PotPlayer]) -> Vec<PotStage> {
    assert!(!players.is_empty(), "Pots computation with no players");

    let active = players.iter().filter(|p| p.is_active()).collect::<Vec<_>>();

    let mut floors = active.iter().map(|p| p.bet).collect::<Vec<_>>();
    floors.sort();
    floors.dedup();

    let mut pots: Vec<PotStage> = Vec::with_capacity(floors.len());
    let mut prev_floor = Chips::ZERO;

    for floor in floors {
        let eligible_player_ids = active
            .iter()
            .filter(|p| p.bet >= floor)
            .map(|p| p.id)
            .collect::<Vec<_>>();

        let amount = active
            .iter()
            .map(|p| p.bet.min(floor) - p.bet.min(prev_floor))
            .sum::<Chips>();

        if amount > Chips::ZERO && eligible_player_ids.len() >= 2 {
            let name = match pots.len() {
                0 => "Main Pot".to_string(),
                n => format!("Side Pot {n}"),
            };

            pots.push(PotStage {
                name,
                amount,
                eligible_player_ids,
            });
        } else if amount > Chips::ZERO {
            debug!("Uncontested {amount} chips above {prev_floor} not in any pot");
        }

        prev_floor = floor;
    }

    pots
}

/// Players payouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payouts(AHashMap<PlayerId, Chips>);

impl Payouts {
    /// The chips won by a player, zero for players that didn't win.
    pub fn get(&self, id: PlayerId) -> Chips {
        self.0.get(&id).copied().unwrap_or_default()
    }

    /// The total chips paid to all players.
    pub fn total(&self) -> Chips {
        self.0.values().copied().sum()
    }

    /// Iterates players payouts in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Chips)> + '_ {
        self.0.iter().map(|(&id, &chips)| (id, chips))
    }

    fn add(&mut self, id: PlayerId, chips: Chips) {
        *self.0.entry(id).or_default() += chips;
    }
}

/// Computes the chips won by each player from the given pots.
///
/// Each pot is split among its eligible players with the best (lowest) rank,
/// the odd chips go one each to the winners with the lowest ids. Every player
/// has an entry in the payouts, zero if the player didn't win any pot.
pub fn compute_payouts(players: &[PotPlayer], pots: &[PotStage]) -> Payouts {
    let mut payouts = Payouts::default();
    for player in players {
        payouts.add(player.id, Chips::ZERO);
    }

    for pot in pots {
        let eligible = players
            .iter()
            .filter(|p| pot.eligible_player_ids.contains(&p.id))
            .collect::<Vec<_>>();

        let Some(best_rank) = eligible.iter().map(|p| p.rank).min() else {
            continue;
        };

        let mut winners = eligible
            .iter()
            .filter(|p| p.rank == best_rank)
            .map(|p| p.id)
            .collect::<Vec<_>>();
        winners.sort();

        let share = pot.amount / winners.len() as u32;
        let remainder = (pot.amount % winners.len() as u32).amount() as usize;

        for (idx, &id) in winners.iter().enumerate() {
            let odd_chip = if idx < remainder {
                Chips::new(1)
            } else {
                Chips::ZERO
            };

            payouts.add(id, share + odd_chip);
        }
    }

    payouts
}

/// Returns the player and amount of the biggest bet part that no other
/// player matched.
///
/// This amount is not in any pot returned by [compute_pots] and belongs back to
/// the player that bet it.
pub fn uncontested_excess(players: &[PotPlayer]) -> Option<(PlayerId, Chips)> {
    let mut active = players.iter().filter(|p| p.is_active()).collect::<Vec<_>>();
    active.sort_by(|p1, p2| p2.bet.cmp(&p1.bet));

    match active.as_slice() {
        [] => None,
        [top] => Some((top.id, top.bet)),
        [top, next, ..] if top.bet > next.bet => Some((top.id, top.bet - next.bet)),
        _ => None,
    }
}
