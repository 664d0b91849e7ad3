// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Types used by the dealer drills.
use serde::{Deserialize, Serialize};
use std::{fmt, iter, ops};

/// A player identifier, 1-based and stable for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a player id.
    ///
    /// Panics if id is zero.
    pub const fn new(id: u32) -> Self {
        assert!(id > 0, "Player ids start from 1");
        Self(id)
    }

    /// Creates the id for the player at the given 0-based seat.
    pub fn from_seat(seat: usize) -> Self {
        Self::new(seat as u32 + 1)
    }

    /// The integer id.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the display name for the player at the given 0-based seat.
///
/// Seats are named `Player A`, `Player B`, ... and wrap to `Player A2` after
/// `Player Z`.
pub fn seat_name(seat: usize) -> String {
    let letter = (b'A' + (seat % 26) as u8) as char;
    match seat / 26 {
        0 => format!("Player {letter}"),
        n => format!("Player {letter}{}", n + 1),
    }
}

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::Div<u32> for Chips {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl ops::Rem<u32> for Chips {
    type Output = Self;

    fn rem(self, rhs: u32) -> Self::Output {
        Self(self.0 % rhs)
    }
}

impl iter::Sum for Chips {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(123).to_string(), "123");
        assert_eq!(Chips(1_000).to_string(), "1,000");
        assert_eq!(Chips(12_345).to_string(), "12,345");
        assert_eq!(Chips(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn chips_arithmetic() {
        let total = [Chips(1_000), Chips(2_500), Chips(3)].into_iter().sum::<Chips>();
        assert_eq!(total, Chips(3_503));
        assert_eq!(total / 2, Chips(1_751));
        assert_eq!(total % 2, Chips(1));
        assert_eq!(Chips(5) - Chips(10), Chips::ZERO);
    }

    #[test]
    fn seat_names() {
        assert_eq!(seat_name(0), "Player A");
        assert_eq!(seat_name(4), "Player E");
        assert_eq!(seat_name(25), "Player Z");
        assert_eq!(seat_name(26), "Player A2");
        assert_eq!(PlayerId::from_seat(0), PlayerId::new(1));
    }

    #[test]
    fn serialized_as_numbers() {
        let json = serde_json::to_string(&(PlayerId::new(3), Chips(1500))).unwrap();
        assert_eq!(json, "[3,1500]");
    }

    #[test]
    #[should_panic]
    fn zero_player_id() {
        PlayerId::new(0);
    }
}
