// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the a-priori tables, with --enumerate evaluates all the hands of a
// given size and checks the counts against the table.
//
// ```bash
// $ cargo r --release --example apriori -- --enumerate 7
// ```
use anyhow::{Result, bail};
use clap::{Parser, value_parser};
use log::info;
use std::time::Instant;

use kibitz_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Enumerate all the hands with this number of cards.
    #[clap(long, short, value_parser = value_parser!(u8).range(5..=7))]
    enumerate: Option<u8>,
}

fn print_table(size: usize) -> Result<()> {
    let total = apriori::total_combinations(size)?;
    println!("{size} cards hands: {total}");

    let rankings = if size == 2 {
        PocketRank::ranks().map(Ranking::Pocket).collect::<Vec<_>>()
    } else {
        HandRank::ranks().map(Ranking::Hand).collect::<Vec<_>>()
    };

    for ranking in rankings {
        let count = apriori::frequency(size, ranking)?;
        let p = apriori::probability(size, ranking)?;
        println!("  {:<18} {count:>10} {:>9.4}%", ranking.to_string(), p * 100.0);
    }

    println!();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    for size in [2, 5, 6, 7] {
        print_table(size)?;
    }

    if let Some(size) = cli.enumerate {
        let size = size as usize;
        info!("Enumerating all {size} cards hands");

        let now = Instant::now();
        let mut counts = [0u64; HandRank::COUNT];
        let mut errors = 0;
        Deck::default().for_each(size, |cards| match evaluate_hand(cards) {
            Ok(rank) => counts[rank as usize] += 1,
            Err(_) => errors += 1,
        });

        let elapsed = now.elapsed().as_secs_f64();
        let total = counts.iter().sum::<u64>();
        info!(
            "Evaluated {total} hands in {elapsed:.3}s, {:.0} hands/sec",
            total as f64 / elapsed
        );

        if errors > 0 {
            bail!("{errors} evaluation errors");
        }

        for rank in HandRank::ranks() {
            let expected = apriori::frequency(size, Ranking::Hand(rank))?;
            if counts[rank as usize] != expected {
                bail!(
                    "{rank} count {} expected {expected}",
                    counts[rank as usize]
                );
            }
        }

        info!("All {size} cards counts match");
    }

    Ok(())
}
