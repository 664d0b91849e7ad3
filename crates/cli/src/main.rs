// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealer Drills terminal trainer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use dealer_eval::GameVariant;

pub mod answer;
pub mod drill;
pub mod terminal;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Log debug messages.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split all-in bets into pots and pay the winners.
    Pots {
        /// The number of scenarios.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=100))]
        rounds: u32,
        /// The random seed for a reproducible drill.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Show the solutions without asking.
        #[clap(long)]
        reveal: bool,
        /// Print scenarios and solutions as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Find the winners at showdown.
    Showdown {
        /// The game variant: holdem, omaha or bigo.
        #[clap(long, default_value = "holdem")]
        variant: GameVariant,
        /// The number of players, 2 or 3 at random if not set.
        #[clap(long, short, value_parser = clap::value_parser!(u8).range(2..=6))]
        players: Option<u8>,
        /// The number of scenarios.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=100))]
        rounds: u32,
        /// The random seed for a reproducible drill.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Show the solutions without asking.
        #[clap(long)]
        reveal: bool,
        /// Print scenarios and solutions as JSON.
        #[clap(long)]
        json: bool,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let mut term = terminal::Terminal::new(io::stdin().lock(), io::stdout());

    match cli.command {
        Command::Pots {
            rounds,
            seed,
            reveal,
            json,
        } => {
            let config = drill::PotDrillConfig {
                rounds,
                reveal,
                json,
            };
            drill::run_pots(&config, &mut make_rng(seed), &mut term)?;
        }
        Command::Showdown {
            variant,
            players,
            rounds,
            seed,
            reveal,
            json,
        } => {
            let config = drill::ShowdownDrillConfig {
                variant,
                players: players.map(usize::from),
                rounds,
                reveal,
                json,
            };
            drill::run_showdown(&config, &mut make_rng(seed), &mut term)?;
        }
    }

    Ok(())
}
