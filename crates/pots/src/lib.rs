// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealer Drills pot settlement engine.
//!
//! Splits the bets of all-in players into a main pot and side pots and
//! distributes each pot to the best ranked eligible players:
//!
//! ```
//! # use dealer_pots::*;
//! let players = vec![
//!     PotPlayer::new(PlayerId::new(1), "Player A", Chips::new(1_000), 1),
//!     PotPlayer::new(PlayerId::new(2), "Player B", Chips::new(2_000), 1),
//!     PotPlayer::new(PlayerId::new(3), "Player C", Chips::new(3_000), 2),
//! ];
//!
//! let pots = compute_pots(&players);
//! assert_eq!(pots.len(), 2);
//! assert_eq!(pots[0].name, "Main Pot");
//! assert_eq!(pots[0].amount, Chips::new(3_000));
//! assert_eq!(pots[1].name, "Side Pot 1");
//! assert_eq!(pots[1].amount, Chips::new(2_000));
//!
//! let payouts = compute_payouts(&players, &pots);
//! assert_eq!(payouts.get(PlayerId::new(1)), Chips::new(1_500));
//! assert_eq!(payouts.get(PlayerId::new(2)), Chips::new(3_500));
//! assert_eq!(payouts.get(PlayerId::new(3)), Chips::ZERO);
//! ```
//!
//! Both functions are pure, [generate_scenario] produces random drills from
//! a caller provided random source.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod pots;
pub use pots::{Payouts, PotPlayer, PotStage, compute_payouts, compute_pots, uncontested_excess};

pub mod scenario;
pub use scenario::{generate_scenario, rank_label};

// Reexport core types.
pub use dealer_core::{Chips, PlayerId};
