// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown drills.
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use dealer_cards::{Card, Deck};
use dealer_core::{PlayerId, seat_name};

use crate::{
    eval::{HandValue, LowValue},
    variant::{BOARD_SIZE, GameVariant, best_hand},
};

/// A player at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownPlayer {
    id: PlayerId,
    name: String,
    hole_cards: Vec<Card>,
    best_high: HandValue,
    best_hand: [Card; 5],
    best_low: Option<LowValue>,
    is_high_winner: bool,
    is_low_winner: bool,
}

impl ShowdownPlayer {
    /// The player id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player hole cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }

    /// The best high value this player can make.
    pub fn best_high(&self) -> HandValue {
        self.best_high
    }

    /// The five cards that make the best high value.
    pub fn best_hand(&self) -> &[Card; 5] {
        &self.best_hand
    }

    /// The best low value, `None` if the player has no qualifying low or the
    /// variant has no low.
    pub fn best_low(&self) -> Option<LowValue> {
        self.best_low
    }

    /// The player wins or ties for the high hand.
    pub fn is_high_winner(&self) -> bool {
        self.is_high_winner
    }

    /// The player wins or ties for the low hand.
    pub fn is_low_winner(&self) -> bool {
        self.is_low_winner
    }
}

/// A showdown with the board, the players hands and the winners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownScenario {
    variant: GameVariant,
    community_cards: Vec<Card>,
    players: Vec<ShowdownPlayer>,
}

impl ShowdownScenario {
    /// Creates a showdown from the board and the players hole cards.
    ///
    /// Players get ids and names from their position in `hands`.
    ///
    /// Panics if there are less than two players or the number of cards
    /// doesn't match the variant.
    pub fn from_cards(variant: GameVariant, board: Vec<Card>, hands: Vec<Vec<Card>>) -> Self {
        assert!(hands.len() >= 2, "A showdown needs at least 2 players");

        let mut players = hands
            .into_iter()
            .enumerate()
            .map(|(seat, hole_cards)| {
                let best = best_hand(variant, &hole_cards, &board);
                ShowdownPlayer {
                    id: PlayerId::from_seat(seat),
                    name: seat_name(seat),
                    hole_cards,
                    best_high: best.high,
                    best_hand: best.high_cards,
                    best_low: best.low,
                    is_high_winner: false,
                    is_low_winner: false,
                }
            })
            .collect::<Vec<_>>();

        if let Some(max_high) = players.iter().map(|p| p.best_high).max() {
            for p in players.iter_mut() {
                p.is_high_winner = p.best_high == max_high;
            }
        }

        // With no qualifying low nobody wins the low.
        if let Some(min_low) = players.iter().filter_map(|p| p.best_low).min() {
            for p in players.iter_mut() {
                p.is_low_winner = p.best_low == Some(min_low);
            }
        }

        Self {
            variant,
            community_cards: board,
            players,
        }
    }

    /// The game variant.
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// The five community cards.
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    /// The players in seat order.
    pub fn players(&self) -> &[ShowdownPlayer] {
        &self.players
    }

    /// The ids of the players that win or tie the high hand.
    pub fn high_winners(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_high_winner)
            .map(|p| p.id)
            .collect()
    }

    /// The ids of the players that win or tie the low hand, empty if no
    /// player has a qualifying low.
    pub fn low_winners(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_low_winner)
            .map(|p| p.id)
            .collect()
    }
}

/// Generates a random showdown for `num_players` players.
///
/// A fresh deck is shuffled with `rng`, the board is dealt first and then each
/// player gets the hole cards for the variant in turn.
///
/// Panics if there are less than 2 players or not enough cards for all players.
pub fn generate_showdown<R: Rng + ?Sized>(
    rng: &mut R,
    num_players: usize,
    variant: GameVariant,
) -> ShowdownScenario {
    assert!(num_players >= 2, "A showdown needs at least 2 players");
    assert!(
        BOARD_SIZE + num_players * variant.hole_cards() <= Deck::SIZE,
        "Not enough cards for {num_players} {variant} players"
    );

    let mut deck = Deck::new_and_shuffled(rng);
    let board = deck.deal_many(BOARD_SIZE);
    let hands = (0..num_players)
        .map(|_| deck.deal_many(variant.hole_cards()))
        .collect::<Vec<_>>();

    let scenario = ShowdownScenario::from_cards(variant, board, hands);

    debug!(
        "Generated {variant} showdown board {:?} high winners {:?} low winners {:?}",
        scenario.community_cards,
        scenario.high_winners(),
        scenario.low_winners()
    );

    scenario
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HandRank;
    use ahash::AHashSet;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn ids(ids: &[u32]) -> Vec<PlayerId> {
        ids.iter().map(|&id| PlayerId::new(id)).collect()
    }

    #[test]
    fn holdem_single_winner() {
        let scenario = ShowdownScenario::from_cards(
            GameVariant::Holdem,
            cards("AS 7D 7C 2H 9S"),
            vec![cards("AH KD"), cards("7H 3C"), cards("9D 9C")],
        );

        assert_eq!(scenario.high_winners(), ids(&[3]));
        assert!(scenario.low_winners().is_empty());

        let p3 = &scenario.players()[2];
        assert_eq!(p3.name(), "Player C");
        assert_eq!(p3.best_high().rank(), HandRank::FullHouse);
        assert!(p3.best_low().is_none());
    }

    #[test]
    fn board_plays_for_everybody() {
        let scenario = ShowdownScenario::from_cards(
            GameVariant::Holdem,
            cards("AS KS QS JS TS"),
            vec![cards("2C 3D"), cards("4H 5C")],
        );

        assert_eq!(scenario.high_winners(), ids(&[1, 2]));
        assert!(scenario.players().iter().all(|p| p.is_high_winner()));
    }

    #[test]
    fn bigo_split_high_and_low() {
        let scenario = ShowdownScenario::from_cards(
            GameVariant::Bigo,
            cards("2S 3S 4D KH KD"),
            vec![cards("AH 6C KS 4C QD"), cards("AC 5H 9S 9C TD")],
        );

        // Player A has kings full of fours, player B a wheel.
        let [p1, p2] = scenario.players() else {
            panic!("Expected two players");
        };
        assert_eq!(p1.best_high().rank(), HandRank::FullHouse);
        assert_eq!(p2.best_high().rank(), HandRank::Straight);
        assert_eq!(p1.best_low().map(|l| l.score()), Some(64321));
        assert_eq!(p2.best_low().map(|l| l.score()), Some(54321));

        assert_eq!(scenario.high_winners(), ids(&[1]));
        assert_eq!(scenario.low_winners(), ids(&[2]));
    }

    #[test]
    fn bigo_tied_low() {
        let scenario = ShowdownScenario::from_cards(
            GameVariant::Bigo,
            cards("2S 3S 4D KH QD"),
            vec![
                cards("AH 5C KS JC JD"),
                cards("AC 5H 9S 9C TD"),
                cards("8H 8C 8D TS TH"),
            ],
        );

        assert_eq!(scenario.low_winners(), ids(&[1, 2]));
        assert!(scenario.players()[2].best_low().is_none());
    }

    #[test]
    fn bigo_without_low() {
        let scenario = ShowdownScenario::from_cards(
            GameVariant::Bigo,
            cards("KH QH JD 9S 9C"),
            vec![cards("AH 2C 3S 4C 5D"), cards("AC 2H 3D 4S 6D")],
        );

        assert!(scenario.players().iter().all(|p| p.best_low().is_none()));
        assert!(scenario.low_winners().is_empty());
        assert!(!scenario.high_winners().is_empty());
    }

    #[test]
    fn generated_showdowns() {
        let mut rng = StdRng::seed_from_u64(13);

        for variant in GameVariant::variants() {
            for num_players in [2, 3, 6] {
                for _ in 0..200 {
                    let scenario = generate_showdown(&mut rng, num_players, variant);
                    assert_eq!(scenario.variant(), variant);
                    assert_eq!(scenario.community_cards().len(), BOARD_SIZE);
                    assert_eq!(scenario.players().len(), num_players);

                    // No card is dealt twice.
                    let mut dealt = AHashSet::default();
                    dealt.extend(scenario.community_cards().iter().copied());
                    for p in scenario.players() {
                        assert_eq!(p.hole_cards().len(), variant.hole_cards());
                        dealt.extend(p.hole_cards().iter().copied());
                    }
                    assert_eq!(dealt.len(), BOARD_SIZE + num_players * variant.hole_cards());

                    // The best hand is made of dealt cards.
                    for p in scenario.players() {
                        assert!(p.best_hand().iter().all(|c| dealt.contains(c)));
                        assert_eq!(HandValue::eval(p.best_hand()), p.best_high());
                    }

                    assert!(!scenario.high_winners().is_empty());

                    let has_low = scenario.players().iter().any(|p| p.best_low().is_some());
                    assert_eq!(has_low, !scenario.low_winners().is_empty());
                    if !variant.has_low() {
                        assert!(!has_low);
                    }
                }
            }
        }
    }

    #[test]
    fn generated_showdown_is_reproducible() {
        let s1 = generate_showdown(&mut StdRng::seed_from_u64(3), 3, GameVariant::Bigo);
        let s2 = generate_showdown(&mut StdRng::seed_from_u64(3), 3, GameVariant::Bigo);
        assert_eq!(s1, s2);
    }

    #[test]
    fn showdown_serialization() {
        let scenario = generate_showdown(&mut StdRng::seed_from_u64(9), 2, GameVariant::Omaha);
        let json = serde_json::to_string(&scenario).unwrap();
        let scenario2: ShowdownScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, scenario2);
    }

    #[test]
    #[should_panic]
    fn one_player_showdown() {
        generate_showdown(&mut StdRng::seed_from_u64(1), 1, GameVariant::Holdem);
    }

    #[test]
    #[should_panic]
    fn too_many_players() {
        generate_showdown(&mut StdRng::seed_from_u64(1), 10, GameVariant::Bigo);
    }
}
