// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand analysis.
use log::debug;
use std::fmt;

use kibitz_cards::{Card, parse_cards};

use crate::{
    Draw, Error, Frequencies, Ranking, Result, Street, apriori, eval::evaluate, posterior,
};

/// The analysis of the known cards of a hand.
///
/// Holds the hand ranking, its a-priori probability among all the hands with
/// the same number of cards and the posterior frequencies for the next street.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    street: Street,
    ranking: Ranking,
    rank_probability: f64,
    posterior: Frequencies,
    draw: Option<Draw>,
}

impl Hand {
    /// Analyzes 2, 5, 6 or 7 cards.
    pub fn analyze(cards: Vec<Card>) -> Result<Self> {
        let street = Street::from_cards(cards.len())?;
        let ranking = evaluate(&cards)?;
        let rank_probability = apriori::probability(cards.len(), ranking)?;
        let posterior = posterior::posterior(&cards)?;
        let draw = match street {
            Street::Flop | Street::Turn => Some(Draw::detect(&cards)?),
            Street::Preflop | Street::River => None,
        };

        debug!(
            "Analyzed {} cards: {ranking} probability {rank_probability:.6} next street total {}",
            cards.len(),
            posterior.total()
        );

        Ok(Self {
            cards,
            street,
            ranking,
            rank_probability,
            posterior,
            draw,
        })
    }

    /// Analyzes the two hole cards and 0, 3, 4 or 5 board cards.
    pub fn with_board(hole: [Card; 2], board: &[Card]) -> Result<Self> {
        if !matches!(board.len(), 0 | 3..=5) {
            return Err(Error::InvalidHandSize(hole.len() + board.len()));
        }

        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        Self::analyze(cards)
    }

    /// Parses and analyzes a list of cards, e.g. "Ah Kd Tc 9c 2s".
    pub fn parse(s: &str) -> Result<Self> {
        Self::analyze(parse_cards(s)?)
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The betting round for the number of known cards.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The hand ranking.
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    /// The a-priori probability of the ranking.
    pub fn rank_probability(&self) -> f64 {
        self.rank_probability
    }

    /// The rank frequencies after the next street.
    pub fn posterior(&self) -> &Frequencies {
        &self.posterior
    }

    /// The straight and flush draws on the flop and the turn.
    pub fn draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(f, "Cards:     {cards}")?;
        writeln!(f, "Street:    {}", self.street)?;
        writeln!(
            f,
            "Ranking:   {} ({:.4}%)",
            self.ranking,
            self.rank_probability * 100.0
        )?;

        if let Some(draw) = &self.draw {
            writeln!(
                f,
                "Draws:     flush {} straight {} straight flush {} outs {}",
                draw.is_flush_draw(),
                draw.is_straight_draw(),
                draw.is_straight_flush_draw(),
                draw.out_count()
            )?;
        }

        let title = match self.street.next() {
            Some(next) => format!("{next}:"),
            None => "Showdown:".to_string(),
        };

        write!(f, "{title:<10} {} combinations", self.posterior.total())?;
        for (rank, count) in self.posterior.iter().filter(|(_, n)| *n > 0) {
            write!(
                f,
                "\n  {:<16} {count:>6} {:>8.4}%",
                rank.name(),
                self.posterior.probability(rank) * 100.0
            )?;
        }

        Ok(())
    }
}
