// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// ...
// High Card:       1302540
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// Eight or better: 57344
// ```

use std::time::Instant;

use dealer_eval::*;

fn main() {
    // Evaluate all 2.6M hands for high and low.
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut lows = 0usize;

    Deck::default().for_each(5, |hand| {
        counts[HandValue::eval(hand).rank() as usize] += 1;
        if LowValue::eval(hand).is_some() {
            lows += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }

    println!("Eight or better: {lows}");
}
