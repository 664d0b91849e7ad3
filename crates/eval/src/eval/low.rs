// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Eight or better low hands evaluation.
use serde::{Deserialize, Serialize};
use std::fmt;

use dealer_cards::Card;

/// The value of a qualifying low hand, a smaller value is a better low.
///
/// The five low ranks, with the Ace counting as one, are sorted from the
/// highest and encoded as decimal digits, so `8 5 4 3 2` is `85432` and it
/// beats `8 6 4 3 2` that is `86432`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LowValue(u32);

impl LowValue {
    /// The highest rank that qualifies for low.
    pub const QUALIFIER: u8 = 8;

    /// Evaluates the low value of a 5 cards hand.
    ///
    /// Returns `None` if the hand doesn't have five distinct ranks eight or
    /// lower.
    ///
    /// Panics if cards doesn't have exactly 5 cards.
    pub fn eval(cards: &[Card]) -> Option<LowValue> {
        assert_eq!(
            cards.len(),
            5,
            "Low evaluation needs 5 cards, got {}",
            cards.len()
        );

        // Bit n set if there is a card with low value n.
        let mut mask = 0u16;
        for c in cards {
            let value = c.rank().low_value();
            if value <= Self::QUALIFIER {
                mask |= 1 << value;
            }
        }

        if mask.count_ones() < 5 {
            return None;
        }

        // Take the five lowest ranks and encode them from the highest.
        let lows = (1..=Self::QUALIFIER).filter(|v| mask & (1 << v) != 0);
        let mut value = 0;
        let mut weight = 1;
        for low in lows.take(5) {
            value += low as u32 * weight;
            weight *= 10;
        }

        Some(LowValue(value))
    }

    /// The low ranks from the highest, Ace is one.
    pub fn ranks(&self) -> [u8; 5] {
        let mut ranks = [0; 5];
        let mut value = self.0;
        for rank in ranks.iter_mut().rev() {
            *rank = (value % 10) as u8;
            value /= 10;
        }

        ranks
    }

    /// The integer score.
    pub fn score(&self) -> u32 {
        self.0
    }

    /// Describes an optional low value, `No Low` if there is no low.
    pub fn describe(low: Option<LowValue>) -> String {
        match low {
            Some(low) => low.to_string(),
            None => "No Low".to_string(),
        }
    }
}

impl fmt::Display for LowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r0, r1, r2, r3, r4] = self.ranks();
        write!(f, "Low: {r0},{r1},{r2},{r3},{r4}")
    }
}
