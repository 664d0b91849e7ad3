// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealer Drills core types shared by the pot and showdown engines.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod poker;
pub use poker::{Chips, PlayerId, seat_name};
