// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io::{BufRead, Write};

use dealer_cards::{Card, Suit};

use crate::answer::AnswerError;

/// A line based terminal that asks questions and prints results.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal that reads answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a line of text.
    pub fn println(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Prints a section title.
    pub fn print_title(&mut self, title: &str) -> Result<()> {
        queue!(
            self.output,
            style::Print("\n"),
            style::PrintStyledContent(title.bold().underlined()),
            style::Print("\n"),
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints a label followed by a list of cards.
    pub fn print_cards(&mut self, label: &str, cards: &[Card]) -> Result<()> {
        queue!(self.output, style::Print(format!("{label:<12}")))?;
        for card in cards {
            let text = format!(" {}{}", card.rank(), card.suit().symbol());
            let content = match card.suit() {
                Suit::Hearts | Suit::Diamonds => text.red(),
                Suit::Spades | Suit::Clubs => text.white(),
            };
            queue!(self.output, style::PrintStyledContent(content))?;
        }

        queue!(self.output, style::Print("\n"))?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints if an answer was correct, with the expected answer if not.
    pub fn print_result(&mut self, correct: bool, expected: &str) -> Result<()> {
        if correct {
            queue!(
                self.output,
                style::PrintStyledContent("  Correct".dark_green()),
                style::Print("\n"),
            )?;
        } else {
            queue!(
                self.output,
                style::PrintStyledContent("  Wrong".dark_red()),
                style::Print(format!(", the answer is {expected}\n")),
            )?;
        }

        self.output.flush()?;
        Ok(())
    }

    /// Asks a question until `parse` accepts the answer.
    ///
    /// Returns `None` when the input ends.
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, AnswerError>,
    {
        loop {
            queue!(
                self.output,
                style::PrintStyledContent(prompt.cyan()),
                style::Print(" "),
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse(&line) {
                Ok(answer) => return Ok(Some(answer)),
                Err(e) => {
                    queue!(
                        self.output,
                        style::PrintStyledContent(format!("  {e}").yellow()),
                        style::Print("\n"),
                    )?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::parse_amount;
    use dealer_core::Chips;
    use std::io::Cursor;

    fn output(term: Terminal<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn ask_repeats_invalid_answers() {
        let mut term = Terminal::new(Cursor::new("abc\n\n1,200\n"), Vec::new());
        let amount = term.ask("Main pot?", parse_amount).unwrap();
        assert_eq!(amount, Some(Chips::new(1200)));

        let out = output(term);
        assert_eq!(out.matches("Main pot?").count(), 3);
        assert!(out.contains("is not a chips amount"));
        assert!(out.contains("please type an answer"));
    }

    #[test]
    fn ask_stops_at_end_of_input() {
        let mut term = Terminal::new(Cursor::new("oops\n"), Vec::new());
        let amount = term.ask("Main pot?", parse_amount).unwrap();
        assert_eq!(amount, None);
    }

    #[test]
    fn cards_with_symbols() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        let cards: [Card; 2] = ["AS".parse().unwrap(), "TH".parse().unwrap()];
        term.print_cards("Board", &cards).unwrap();

        let out = output(term);
        assert!(out.starts_with("Board"));
        assert!(out.contains("A♠"));
        assert!(out.contains("T♥"));
    }

    #[test]
    fn results() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        term.print_result(true, "100").unwrap();
        term.print_result(false, "200").unwrap();

        let out = output(term);
        assert!(out.contains("Correct"));
        assert!(out.contains("Wrong"));
        assert!(out.contains("the answer is 200"));
        assert!(!out.contains("the answer is 100"));
    }
}
