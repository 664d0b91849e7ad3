// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Parsing of the drill answers.
use thiserror::Error;

use dealer_core::{Chips, PlayerId};

/// An answer that cannot be parsed, the question is asked again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    /// Nothing was typed.
    #[error("please type an answer")]
    Empty,
    /// The amount is not a number.
    #[error("{0:?} is not a chips amount")]
    InvalidAmount(String),
    /// The player is neither an id nor a seat letter.
    #[error("{0:?} is not a player id")]
    InvalidPlayer(String),
    /// The player is not in this drill.
    #[error("there is no player {0}")]
    UnknownPlayer(String),
}

/// Parses a chips amount like `1500` or `1,500`.
pub fn parse_amount(answer: &str) -> Result<Chips, AnswerError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(AnswerError::Empty);
    }

    answer
        .replace([',', '_'], "")
        .parse::<u32>()
        .map(Chips::new)
        .map_err(|_| AnswerError::InvalidAmount(answer.to_string()))
}

/// Parses a list of winners separated by commas or spaces.
///
/// Players are given by id (`1`) or by seat letter (`A`), `none` or `-`
/// means no winners. The result is sorted by id without duplicates.
pub fn parse_winners(answer: &str, players: &[PlayerId]) -> Result<Vec<PlayerId>, AnswerError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(AnswerError::Empty);
    }

    if answer.eq_ignore_ascii_case("none") || answer == "-" {
        return Ok(Vec::new());
    }

    let mut winners = answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| parse_player(s, players))
        .collect::<Result<Vec<_>, _>>()?;

    winners.sort();
    winners.dedup();
    Ok(winners)
}

fn parse_player(s: &str, players: &[PlayerId]) -> Result<PlayerId, AnswerError> {
    let id = match s.parse::<u32>() {
        Ok(id) => id,
        Err(_) => match s.chars().collect::<Vec<_>>().as_slice() {
            [c] if c.is_ascii_alphabetic() => (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1,
            _ => return Err(AnswerError::InvalidPlayer(s.to_string())),
        },
    };

    players
        .iter()
        .find(|p| p.get() == id)
        .copied()
        .ok_or_else(|| AnswerError::UnknownPlayer(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[u32]) -> Vec<PlayerId> {
        ids.iter().map(|&id| PlayerId::new(id)).collect()
    }

    #[test]
    fn amounts() {
        assert_eq!(parse_amount("1500"), Ok(Chips::new(1500)));
        assert_eq!(parse_amount(" 3,500 "), Ok(Chips::new(3500)));
        assert_eq!(parse_amount("0"), Ok(Chips::ZERO));
        assert_eq!(parse_amount(""), Err(AnswerError::Empty));
        assert_eq!(
            parse_amount("lots"),
            Err(AnswerError::InvalidAmount("lots".to_string()))
        );
        assert!(parse_amount("-10").is_err());
    }

    #[test]
    fn winners() {
        let players = ids(&[1, 2, 3]);
        assert_eq!(parse_winners("1", &players), Ok(ids(&[1])));
        assert_eq!(parse_winners("3, 1", &players), Ok(ids(&[1, 3])));
        assert_eq!(parse_winners("b c b", &players), Ok(ids(&[2, 3])));
        assert_eq!(parse_winners("none", &players), Ok(Vec::new()));
        assert_eq!(parse_winners("-", &players), Ok(Vec::new()));
        assert_eq!(parse_winners(" ", &players), Err(AnswerError::Empty));
        assert_eq!(
            parse_winners("4", &players),
            Err(AnswerError::UnknownPlayer("4".to_string()))
        );
        assert_eq!(
            parse_winners("1,x2", &players),
            Err(AnswerError::InvalidPlayer("x2".to_string()))
        );
    }
}
