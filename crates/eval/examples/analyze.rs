// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example analyze -- 2h 2s 6c 3h 4h 5h
// Cards:     2h 2s 6c 3h 4h 5h
// Street:    Turn
// Ranking:   Straight (1.7763%)
// Draws:     flush true straight true straight flush true outs 15
// River:     46 combinations
//   Straight             37  80.4348%
//   Flush                 7  15.2174%
//   Straight flush        2   4.3478%
//
// $ cargo r --example analyze -- --hole "Ah Kh" --board "Qh Jh 2c"
// $ cargo r --example analyze -- --random 5
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use kibitz_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The cards to analyze, e.g. Ah Kd Tc 9c 2s.
    cards: Vec<String>,
    /// The two hole cards, analyzed with the board cards.
    #[clap(long, conflicts_with = "cards")]
    hole: Option<String>,
    /// The board cards dealt so far.
    #[clap(long, short, requires = "hole", default_value = "")]
    board: String,
    /// Deal a random hand with 2, 5, 6 or 7 cards.
    #[clap(long, short, conflicts_with_all = ["cards", "hole"],
           value_parser = parse_hand_size)]
    random: Option<u8>,
}

fn parse_hand_size(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(n @ (2 | 5 | 6 | 7)) => Ok(n),
        _ => Err(format!("expected 2, 5, 6 or 7 cards, got {s}")),
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let hand = if let Some(hole) = cli.hole {
        let hole = parse_cards(&hole)?;
        let [c1, c2] = hole.as_slice() else {
            bail!("Expected 2 hole cards got {}", hole.len());
        };

        Hand::with_board([*c1, *c2], &parse_cards(&cli.board)?)?
    } else if let Some(count) = cli.random {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let cards = (0..count).filter_map(|_| deck.deal()).collect::<Vec<_>>();
        Hand::analyze(cards)?
    } else {
        Hand::parse(&cli.cards.join(" "))?
    };

    info!("Analyzed {} cards", hand.cards().len());
    println!("{hand}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hand_size() {
        for n in [2u8, 5, 6, 7] {
            assert_eq!(parse_hand_size(&n.to_string()), Ok(n));
        }

        for s in ["0", "1", "3", "4", "8", "x", ""] {
            assert!(parse_hand_size(s).is_err(), "{s}");
        }

        assert!(Cli::try_parse_from(["analyze", "--random", "4"]).is_err());
        let cli = Cli::try_parse_from(["analyze", "--random", "6"]).unwrap();
        assert_eq!(cli.random, Some(6));
    }
}
