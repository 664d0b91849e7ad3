// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! High hands evaluation.
use serde::{Deserialize, Serialize};
use std::fmt;

use dealer_cards::{Card, Rank};

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all the categories from the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{desc}")
    }
}

/// The value of a high hand, a bigger value is a stronger hand.
///
/// The value is `category * 15^5 + d0 * 15^4 + d1 * 15^3 + ... + d4`, where the
/// category goes from 1 for a high card to 9 for a straight flush and the
/// digits are the ranks that break ties in order of significance, ranks in a
/// bigger group first and then higher ranks first:
///
/// ```text
///   K K 7 7 A  =>  3 * 15^5 + 13 * 15^4 + 7 * 15^3 + 14 * 15^2
///   A A A 9 9  =>  7 * 15^5 + 14 * 15^4 + 9 * 15^3
/// ```
///
/// Straights use only the top card, a wheel (A 2 3 4 5) tops at five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u32);

impl HandValue {
    /// The radix used to encode ranks.
    pub const RADIX: u32 = 15;

    /// The weight of the hand category.
    const CATEGORY_BASE: u32 = Self::RADIX.pow(5);

    /// Number of cards in an evaluated hand.
    pub const HAND_SIZE: usize = 5;

    /// Evaluates a 5 cards hand.
    ///
    /// Panics if cards doesn't have exactly 5 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert_eq!(
            cards.len(),
            Self::HAND_SIZE,
            "High evaluation needs 5 cards, got {}",
            cards.len()
        );

        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank().value() as usize] += 1;
        }

        // Rank groups sorted by size and then by rank.
        let mut groups = [(0u8, 0u8); 5];
        let mut num_groups = 0;
        for value in (2..=14).rev() {
            if counts[value] > 0 {
                groups[num_groups] = (counts[value], value as u8);
                num_groups += 1;
            }
        }
        let groups = &mut groups[..num_groups];
        groups.sort_by(|g1, g2| g2.0.cmp(&g1.0).then(g2.1.cmp(&g1.1)));

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight_top = Self::straight_top(groups);

        let rank = match (straight_top, is_flush, groups[0].0, groups.get(1).map(|g| g.0)) {
            (Some(_), true, _, _) => HandRank::StraightFlush,
            (_, _, 4, _) => HandRank::FourOfAKind,
            (_, _, 3, Some(2)) => HandRank::FullHouse,
            (_, true, _, _) => HandRank::Flush,
            (Some(_), false, _, _) => HandRank::Straight,
            (_, _, 3, _) => HandRank::ThreeOfAKind,
            (_, _, 2, Some(2)) => HandRank::TwoPair,
            (_, _, 2, _) => HandRank::OnePair,
            _ => HandRank::HighCard,
        };

        let mut value = (rank as u32 + 1) * Self::CATEGORY_BASE;
        if let Some(top) = straight_top {
            value += top as u32 * Self::RADIX.pow(4);
        } else {
            for (pos, &(_, digit)) in groups.iter().enumerate() {
                value += digit as u32 * Self::RADIX.pow(4 - pos as u32);
            }
        }

        HandValue(value)
    }

    /// Returns the top card value if the groups make a straight.
    fn straight_top(groups: &[(u8, u8)]) -> Option<u8> {
        if groups.len() != 5 {
            return None;
        }

        let high = groups[0].1;
        let low = groups[4].1;
        if high - low == 4 {
            Some(high)
        } else if high == Rank::Ace.value() && groups[1].1 == Rank::Five.value() {
            // A 5 4 3 2, with five distinct ranks and a five second the rest
            // must be 4 3 2.
            Some(Rank::Five.value())
        } else {
            None
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        match self.0 / Self::CATEGORY_BASE {
            1 => HandRank::HighCard,
            2 => HandRank::OnePair,
            3 => HandRank::TwoPair,
            4 => HandRank::ThreeOfAKind,
            5 => HandRank::Straight,
            6 => HandRank::Flush,
            7 => HandRank::FullHouse,
            8 => HandRank::FourOfAKind,
            9 => HandRank::StraightFlush,
            _ => panic!("Invalid hand value {}", self.0),
        }
    }

    /// The integer score.
    pub fn score(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}
