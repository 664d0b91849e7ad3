// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealer Drills cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use dealer_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10d".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! a [Deck] type that is shuffled with a caller provided random source and
//! dealt from the front:
//!
//! ```
//! # use dealer_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let board = deck.deal_many(5);
//! assert_eq!(board.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
//!
//! and index based k-subset enumeration used to pick the cards that make
//! up a hand:
//!
//! ```
//! # use dealer_cards::combinations;
//! let mut counter = 0;
//! combinations::for_each_subset(&[1, 2, 3, 4, 5, 6, 7], 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 21);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combinations;
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
