// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Pot and showdown drills.
use anyhow::Result;
use log::info;
use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};

use dealer_core::{Chips, PlayerId};
use dealer_eval::{GameVariant, LowValue, ShowdownScenario, generate_showdown};
use dealer_pots::{
    Payouts, PotPlayer, PotStage, compute_payouts, compute_pots, generate_scenario, rank_label,
    uncontested_excess,
};

use crate::{
    answer::{parse_amount, parse_winners},
    terminal::Terminal,
};

/// Pot drill configuration.
#[derive(Debug, Clone)]
pub struct PotDrillConfig {
    /// The number of scenarios.
    pub rounds: u32,
    /// Show the solutions without asking.
    pub reveal: bool,
    /// Print the scenarios and solutions as JSON.
    pub json: bool,
}

/// Showdown drill configuration.
#[derive(Debug, Clone)]
pub struct ShowdownDrillConfig {
    /// The game variant.
    pub variant: GameVariant,
    /// The number of players, 2 or 3 at random if not set.
    pub players: Option<usize>,
    /// The number of scenarios.
    pub rounds: u32,
    /// Show the solutions without asking.
    pub reveal: bool,
    /// Print the scenarios and solutions as JSON.
    pub json: bool,
}

/// A pot scenario with its solution.
#[derive(Debug, Serialize)]
struct PotSolution<'a> {
    players: &'a [PotPlayer],
    pots: &'a [PotStage],
    payouts: &'a Payouts,
    uncontested: Option<(PlayerId, Chips)>,
}

/// Runs the pot drill.
pub fn run_pots<R, I, W>(
    config: &PotDrillConfig,
    rng: &mut R,
    term: &mut Terminal<I, W>,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    info!("Starting pot drill with {} rounds", config.rounds);

    let mut played = 0;
    for round in 1..=config.rounds {
        let players = generate_scenario(rng);
        let pots = compute_pots(&players);
        let payouts = compute_payouts(&players, &pots);
        let uncontested = uncontested_excess(&players);
        played = round;

        if config.json {
            let solution = PotSolution {
                players: &players,
                pots: &pots,
                payouts: &payouts,
                uncontested,
            };
            term.println(serde_json::to_string_pretty(&solution)?)?;
            continue;
        }

        term.print_title(&format!("Round {round}/{}", config.rounds))?;
        let ranks = players.iter().map(|p| p.rank).collect::<Vec<_>>();
        for p in &players {
            term.println(format!(
                "{:<10} bet {:>7}  {}",
                p.name,
                p.bet.to_string(),
                rank_label(p.rank, &ranks)
            ))?;
        }

        if !pot_questions(config, term, &players, &pots, &payouts)? {
            break;
        }

        if let Some((id, amount)) = uncontested {
            if let Some(p) = players.iter().find(|p| p.id == id) {
                term.println(format!("{} gets back {amount} uncontested", p.name))?;
            }
        }
    }

    info!("Pot drill finished after {played} rounds");
    Ok(())
}

/// Asks or reveals the pots and the payouts, returns false if the input ended.
fn pot_questions<I: BufRead, W: Write>(
    config: &PotDrillConfig,
    term: &mut Terminal<I, W>,
    players: &[PotPlayer],
    pots: &[PotStage],
    payouts: &Payouts,
) -> Result<bool> {
    let player_name = |id: PlayerId| {
        players
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or_default()
    };

    for pot in pots {
        if config.reveal {
            let eligible = pot
                .eligible_player_ids
                .iter()
                .map(|&id| player_name(id))
                .collect::<Vec<_>>();
            term.println(format!(
                "{}: {} for {}",
                pot.name,
                pot.amount,
                eligible.join(", ")
            ))?;
            continue;
        }

        let Some(answer) = term.ask(&format!("{} amount?", pot.name), parse_amount)? else {
            return Ok(false);
        };
        term.print_result(answer == pot.amount, &pot.amount.to_string())?;
    }

    for p in players {
        let payout = payouts.get(p.id);
        if config.reveal {
            term.println(format!("{} payout: {payout}", p.name))?;
            continue;
        }

        let Some(answer) = term.ask(&format!("{} payout?", p.name), parse_amount)? else {
            return Ok(false);
        };
        term.print_result(answer == payout, &payout.to_string())?;
    }

    Ok(true)
}

/// Runs the showdown drill.
pub fn run_showdown<R, I, W>(
    config: &ShowdownDrillConfig,
    rng: &mut R,
    term: &mut Terminal<I, W>,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    info!(
        "Starting {} showdown drill with {} rounds",
        config.variant, config.rounds
    );

    let mut played = 0;
    for round in 1..=config.rounds {
        let num_players = config.players.unwrap_or_else(|| rng.random_range(2..=3));
        let scenario = generate_showdown(rng, num_players, config.variant);
        played = round;

        if config.json {
            term.println(serde_json::to_string_pretty(&scenario)?)?;
            continue;
        }

        term.print_title(&format!(
            "Round {round}/{} {}",
            config.rounds, config.variant
        ))?;
        term.print_cards("Board", scenario.community_cards())?;
        for p in scenario.players() {
            term.print_cards(&format!("{} ({})", p.name(), p.id()), p.hole_cards())?;
        }

        if !showdown_questions(config, term, &scenario)? {
            break;
        }

        // Show every player hand after the answers.
        for p in scenario.players() {
            let mut description = p.best_high().to_string();
            if config.variant.has_low() {
                description = format!("{description}, {}", LowValue::describe(p.best_low()));
            }

            term.print_cards(p.name(), p.best_hand())?;
            term.println(format!("{:<12} {description}", ""))?;
        }
    }

    info!("Showdown drill finished after {played} rounds");
    Ok(())
}

/// Asks or reveals the winners, returns false if the input ended.
fn showdown_questions<I: BufRead, W: Write>(
    config: &ShowdownDrillConfig,
    term: &mut Terminal<I, W>,
    scenario: &ShowdownScenario,
) -> Result<bool> {
    let ids = scenario.players().iter().map(|p| p.id()).collect::<Vec<_>>();

    let mut questions = vec![("High winners?", scenario.high_winners())];
    if config.variant.has_low() {
        questions.push(("Low winners?", scenario.low_winners()));
    }

    for (prompt, winners) in questions {
        let expected = format_winners(&winners);
        if config.reveal {
            term.println(format!("{prompt} {expected}"))?;
            continue;
        }

        let Some(answer) = term.ask(prompt, |s| parse_winners(s, &ids))? else {
            return Ok(false);
        };
        term.print_result(answer == winners, &expected)?;
    }

    Ok(true)
}

fn format_winners(winners: &[PlayerId]) -> String {
    if winners.is_empty() {
        "none".to_string()
    } else {
        winners
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::io::Cursor;

    fn pots_config() -> PotDrillConfig {
        PotDrillConfig {
            rounds: 1,
            reveal: false,
            json: false,
        }
    }

    fn showdown_config(variant: GameVariant) -> ShowdownDrillConfig {
        ShowdownDrillConfig {
            variant,
            players: Some(3),
            rounds: 1,
            reveal: false,
            json: false,
        }
    }

    fn run_pots_with(config: &PotDrillConfig, seed: u64, input: &str) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut term = Terminal::new(Cursor::new(input), Vec::new());
        run_pots(config, &mut rng, &mut term).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    fn run_showdown_with(config: &ShowdownDrillConfig, seed: u64, input: &str) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut term = Terminal::new(Cursor::new(input), Vec::new());
        run_showdown(config, &mut rng, &mut term).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn pot_drill_correct_answers() {
        let players = generate_scenario(&mut StdRng::seed_from_u64(21));
        let pots = compute_pots(&players);
        let payouts = compute_payouts(&players, &pots);

        let mut input = String::new();
        for pot in &pots {
            input.push_str(&format!("{}\n", pot.amount));
        }
        for p in &players {
            input.push_str(&format!("{}\n", payouts.get(p.id).amount()));
        }

        let out = run_pots_with(&pots_config(), 21, &input);
        assert_eq!(out.matches("Correct").count(), pots.len() + players.len());
        assert!(!out.contains("Wrong"));
        assert!(out.contains("Main Pot amount?"));
        for p in &players {
            assert!(out.contains(&format!("{} payout?", p.name)));
        }
    }

    #[test]
    fn pot_drill_wrong_answers() {
        let players = generate_scenario(&mut StdRng::seed_from_u64(5));
        let pots = compute_pots(&players);
        let input = "1\n".repeat(pots.len() + players.len());

        let out = run_pots_with(&pots_config(), 5, &input);
        let main_pot = &pots[0];
        assert!(out.contains(&format!("the answer is {}", main_pot.amount)));
        assert!(out.matches("Wrong").count() >= pots.len());
    }

    #[test]
    fn pot_drill_stops_at_end_of_input() {
        let config = PotDrillConfig {
            rounds: 3,
            ..pots_config()
        };
        let out = run_pots_with(&config, 5, "");
        assert_eq!(out.matches("Main Pot amount?").count(), 1);
        assert!(!out.contains("Round 2/3"));
    }

    #[test]
    fn pot_drill_reveal() {
        let config = PotDrillConfig {
            rounds: 2,
            reveal: true,
            json: false,
        };
        let out = run_pots_with(&config, 8, "");
        assert!(out.contains("Round 2/2"));
        assert!(out.contains("Main Pot: "));
        assert!(!out.contains("amount?"));
        assert!(out.contains("Player A payout: "));
    }

    #[test]
    fn pot_drill_json() {
        let config = PotDrillConfig {
            rounds: 1,
            reveal: false,
            json: true,
        };
        let out = run_pots_with(&config, 8, "");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let players = value["players"].as_array().unwrap();
        let pots = value["pots"].as_array().unwrap();
        assert!(players.len() >= 3);
        assert!(!pots.is_empty());
        assert_eq!(pots[0]["name"], "Main Pot");
    }

    #[test]
    fn showdown_drill_correct_answers() {
        for variant in GameVariant::variants() {
            let scenario = generate_showdown(&mut StdRng::seed_from_u64(17), 3, variant);

            let mut input = format!("{}\n", format_winners(&scenario.high_winners()));
            if variant.has_low() {
                input.push_str(&format!("{}\n", format_winners(&scenario.low_winners())));
            }

            let out = run_showdown_with(&showdown_config(variant), 17, &input);
            let questions = if variant.has_low() { 2 } else { 1 };
            assert_eq!(out.matches("Correct").count(), questions);
            assert!(!out.contains("Wrong"));
            assert_eq!(out.contains("Low winners?"), variant.has_low());
            assert!(out.contains("Player C (3)"));

            for p in scenario.players() {
                assert!(out.contains(&p.best_high().to_string()));
            }
        }
    }

    #[test]
    fn showdown_drill_wrong_answer() {
        let scenario = generate_showdown(&mut StdRng::seed_from_u64(4), 3, GameVariant::Holdem);
        let out = run_showdown_with(&showdown_config(GameVariant::Holdem), 4, "1,2,3\n");

        if scenario.high_winners().len() == 3 {
            assert!(out.contains("Correct"));
        } else {
            let expected = format_winners(&scenario.high_winners());
            assert!(out.contains(&format!("the answer is {expected}")));
        }
    }

    #[test]
    fn showdown_drill_reveal_and_json() {
        let config = ShowdownDrillConfig {
            reveal: true,
            ..showdown_config(GameVariant::Bigo)
        };
        let out = run_showdown_with(&config, 2, "");
        assert!(out.contains("High winners? "));
        assert!(out.contains("Low winners? "));
        assert!(out.contains("Board"));

        let config = ShowdownDrillConfig {
            json: true,
            ..showdown_config(GameVariant::Omaha)
        };
        let out = run_showdown_with(&config, 2, "");
        let scenario: ShowdownScenario = serde_json::from_str(&out).unwrap();
        assert_eq!(scenario.players().len(), 3);
        assert_eq!(scenario.variant(), GameVariant::Omaha);
    }

    #[test]
    fn random_player_count() {
        let config = ShowdownDrillConfig {
            players: None,
            rounds: 20,
            reveal: true,
            ..showdown_config(GameVariant::Holdem)
        };
        let out = run_showdown_with(&config, 11, "");
        assert_eq!(out.matches("Round ").count(), 20);
        assert!(!out.contains("Player D"));
    }

    #[test]
    fn winners_format() {
        assert_eq!(format_winners(&[]), "none");
        assert_eq!(
            format_winners(&[PlayerId::new(1), PlayerId::new(3)]),
            "1,3"
        );
    }
}
