// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Both evaluators take exactly five cards, variant rules that pick five cards
//! out of hole and board cards are in [crate::variant].
//!
//! [HandValue] encodes the hand category and the ranks that break ties within
//! the category as a single integer using radix 15 digits, so that any two
//! hands compare with integer comparison.
//!
//! [LowValue] encodes an 8-or-better low hand as a five digits decimal number
//! with the highest low card first, a smaller value is a better low.

mod high;
pub use high::{HandRank, HandValue};

mod low;
pub use low::LowValue;
