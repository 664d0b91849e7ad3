// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealer Drills hand evaluator.
//!
//! Scores 5 cards poker hands for high and for 8-or-better low, picks the best
//! hand a player can make under the rules of a [GameVariant], and generates
//! showdown drills with the winners of the high and low halves.
//!
//! High hands are compared with [HandValue], bigger is better:
//!
//! ```
//! # use dealer_eval::*;
//! let cards = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//! let v1 = HandValue::eval(&cards("KS KD QH 7C 3S"));
//! let v2 = HandValue::eval(&cards("2S 2D AH 7C 3S"));
//! assert!(v1 > v2);
//! assert_eq!(v1.rank(), HandRank::OnePair);
//! ```
//!
//! while low hands are scored with [LowValue] where smaller is better, and a
//! hand may have no qualifying low at all:
//!
//! ```
//! # use dealer_eval::*;
//! # let cards = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//! let wheel = LowValue::eval(&cards("AS 2D 3H 4C 5S")).unwrap();
//! let eight = LowValue::eval(&cards("8S 2D 3H 4C 5S")).unwrap();
//! assert!(wheel < eight);
//! assert!(LowValue::eval(&cards("9S 2D 3H 4C 5S")).is_none());
//! ```
//!
//! A random showdown is generated with a caller provided random source:
//!
//! ```
//! # use dealer_eval::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(1);
//! let showdown = generate_showdown(&mut rng, 3, GameVariant::Omaha);
//! assert_eq!(showdown.players().len(), 3);
//! assert!(showdown.players().iter().any(|p| p.is_high_winner()));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, LowValue};

pub mod variant;
pub use variant::{BestHand, GameVariant, ParseVariantError, best_hand};

pub mod showdown;
pub use showdown::{ShowdownPlayer, ShowdownScenario, generate_showdown};

// Reexport cards types.
pub use dealer_cards::{Card, Deck, Rank, Suit};
pub use dealer_core::PlayerId;
