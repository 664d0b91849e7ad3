// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Game variants rules for building the best hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use dealer_cards::{Card, combinations};

use crate::eval::{HandValue, LowValue};

/// The number of community cards.
pub const BOARD_SIZE: usize = 5;

/// A poker game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// Texas Hold'em, any five of two hole cards and the board.
    Holdem,
    /// Omaha, exactly two of four hole cards and three board cards.
    Omaha,
    /// Five cards Omaha hi-lo, exactly two of five hole cards and three board
    /// cards, for both the high and the eight or better low.
    Bigo,
}

impl GameVariant {
    /// Returns all variants.
    pub fn variants() -> impl DoubleEndedIterator<Item = GameVariant> {
        [GameVariant::Holdem, GameVariant::Omaha, GameVariant::Bigo].into_iter()
    }

    /// The number of hole cards dealt to each player.
    pub fn hole_cards(&self) -> usize {
        match self {
            GameVariant::Holdem => 2,
            GameVariant::Omaha => 4,
            GameVariant::Bigo => 5,
        }
    }

    /// Checks if the variant splits the pot with a low hand.
    pub fn has_low(&self) -> bool {
        matches!(self, GameVariant::Bigo)
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameVariant::Holdem => "HOLDEM",
            GameVariant::Omaha => "OMAHA",
            GameVariant::Bigo => "BIGO",
        };

        write!(f, "{name}")
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown game variant {0:?}, expected holdem, omaha or bigo")]
pub struct ParseVariantError(String);

impl FromStr for GameVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "holdem" => Ok(GameVariant::Holdem),
            "omaha" => Ok(GameVariant::Omaha),
            "bigo" => Ok(GameVariant::Bigo),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// The best hand a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    /// The best high value.
    pub high: HandValue,
    /// The cards that make the best high value.
    pub high_cards: [Card; 5],
    /// The best low value, only for variants with a low hand.
    pub low: Option<LowValue>,
}

impl BestHand {
    fn new(first: [Card; 5]) -> Self {
        Self {
            high: HandValue::eval(&first),
            high_cards: first,
            low: None,
        }
    }

    fn update(&mut self, hand: [Card; 5], with_low: bool) {
        let high = HandValue::eval(&hand);
        if high > self.high {
            self.high = high;
            self.high_cards = hand;
        }

        if with_low {
            if let Some(low) = LowValue::eval(&hand) {
                if self.low.is_none_or(|best| low < best) {
                    self.low = Some(low);
                }
            }
        }
    }
}

/// Evaluates the best hand for the given hole cards and board.
///
/// Hold'em uses any five of the seven cards, Omaha and BIGO use exactly two
/// hole cards and three board cards. For BIGO the best low is the lowest of
/// all the combinations and may come from different cards than the best high.
///
/// Panics if the number of hole cards doesn't match the variant or the board
/// doesn't have five cards.
pub fn best_hand(variant: GameVariant, hole: &[Card], board: &[Card]) -> BestHand {
    assert_eq!(
        hole.len(),
        variant.hole_cards(),
        "{variant} needs {} hole cards",
        variant.hole_cards()
    );
    assert_eq!(board.len(), BOARD_SIZE, "The board needs {BOARD_SIZE} cards");

    let mut best = match variant {
        GameVariant::Holdem => BestHand::new([board[0], board[1], board[2], board[3], board[4]]),
        GameVariant::Omaha | GameVariant::Bigo => {
            BestHand::new([hole[0], hole[1], board[0], board[1], board[2]])
        }
    };

    match variant {
        GameVariant::Holdem => {
            let cards = hole.iter().chain(board).copied().collect::<Vec<_>>();
            combinations::for_each_subset(&cards, 5, |hand| {
                best.update([hand[0], hand[1], hand[2], hand[3], hand[4]], false);
            });
        }
        GameVariant::Omaha | GameVariant::Bigo => {
            combinations::for_each_subset(hole, 2, |h| {
                combinations::for_each_subset(board, 3, |b| {
                    best.update([h[0], h[1], b[0], b[1], b[2]], variant.has_low());
                });
            });
        }
    }

    best
}
