// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Classifies a 5 cards hand with a rank histogram and a straight bit test,
//! and a 6 or 7 cards hand as the best ranking among all its 5 cards subsets.
//! Two cards hands are classified with the [PocketRank] categories, see
//! [evaluate] for a function that handles both cases.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use kibitz_cards::{Card, Rank};

use crate::{Error, Result};

pub(crate) mod stats;
use stats::{CardStats, ROYAL, is_straight};

/// The category of a 5, 6 or 7 cards hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, straights or flushes.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, the Ace can play low.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// An Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of hand ranks.
    pub const COUNT: usize = 10;

    const ALL: [HandRank; HandRank::COUNT] = {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
    };

    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for an index in 0..10.
    pub fn from_index(index: usize) -> Option<HandRank> {
        Self::ALL.get(index).copied()
    }

    /// The rank display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two pair",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full house",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::StraightFlush => "Straight flush",
            HandRank::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The category of the two hole cards.
///
/// Pair is the strongest category, the others split the unpaired hands by
/// suit and rank adjacency. Ordering puts Pair above all the unpaired
/// categories, that compare in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PocketRank {
    /// Unpaired, unsuited and not connected.
    HighCard = 0,
    /// Two cards with the same rank.
    Pair,
    /// Same suit, not connected.
    SuitedCards,
    /// Adjacent ranks, not suited.
    ConnectedCards,
    /// Adjacent ranks of the same suit.
    ConnectedAndSuited,
}

impl PocketRank {
    /// The number of pocket ranks.
    pub const COUNT: usize = 5;

    const ALL: [PocketRank; PocketRank::COUNT] = [
        PocketRank::HighCard,
        PocketRank::Pair,
        PocketRank::SuitedCards,
        PocketRank::ConnectedCards,
        PocketRank::ConnectedAndSuited,
    ];

    /// Returns all pocket ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = PocketRank> {
        Self::ALL.into_iter()
    }

    /// The rank display name.
    pub fn name(&self) -> &'static str {
        match self {
            PocketRank::HighCard => "High card",
            PocketRank::Pair => "Pocket pair",
            PocketRank::SuitedCards => "Suited",
            PocketRank::ConnectedCards => "Connectors",
            PocketRank::ConnectedAndSuited => "Suited connectors",
        }
    }
}

impl Ord for PocketRank {
    fn cmp(&self, other: &Self) -> Ordering {
        let strength = |r: &PocketRank| match r {
            PocketRank::Pair => PocketRank::COUNT,
            r => *r as usize,
        };

        strength(self).cmp(&strength(other))
    }
}

impl PartialOrd for PocketRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PocketRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ranking of a hand, the category space depends on the number of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ranking {
    /// The ranking of the two hole cards.
    Pocket(PocketRank),
    /// The ranking of a 5, 6 or 7 cards hand.
    Hand(HandRank),
}

impl Ranking {
    /// The hand rank, if this is not a pocket ranking.
    pub fn hand_rank(&self) -> Option<HandRank> {
        match self {
            Ranking::Hand(rank) => Some(*rank),
            Ranking::Pocket(_) => None,
        }
    }

    /// The pocket rank, if this is a pocket ranking.
    pub fn pocket_rank(&self) -> Option<PocketRank> {
        match self {
            Ranking::Pocket(rank) => Some(*rank),
            Ranking::Hand(_) => None,
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ranking::Pocket(rank) => write!(f, "{rank}"),
            Ranking::Hand(rank) => write!(f, "{rank}"),
        }
    }
}

/// Evaluates a 2, 5, 6 or 7 cards hand.
///
/// Cards are assumed to be distinct.
pub fn evaluate(cards: &[Card]) -> Result<Ranking> {
    match cards {
        [c1, c2] => Ok(Ranking::Pocket(evaluate_pocket(*c1, *c2))),
        _ => evaluate_hand(cards).map(Ranking::Hand),
    }
}

/// Evaluates a 5, 6 or 7 cards hand.
///
/// For 6 and 7 cards the result is the best ranking among all the 5 cards
/// subsets, the result doesn't depend on the cards order.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank> {
    match cards.len() {
        5 => Ok(eval_five(cards)),
        n @ (6 | 7) => {
            let mut best = HandRank::HighCard;
            let mut hand = [cards[0]; 5];

            // Each subset is the bits set of a mask with 5 bits set.
            for mask in (0u8..(1 << n)).filter(|m| m.count_ones() == 5) {
                let selected = cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << *i) != 0)
                    .map(|(_, c)| *c);
                for (slot, card) in hand.iter_mut().zip(selected) {
                    *slot = card;
                }

                best = best.max(eval_five(&hand));
                if best == HandRank::RoyalFlush {
                    break;
                }
            }

            Ok(best)
        }
        n => Err(Error::InvalidHandSize(n)),
    }
}

/// Evaluates the two hole cards.
///
/// Ace and Deuce are connected, the Ace can play below the Deuce.
pub fn evaluate_pocket(c1: Card, c2: Card) -> PocketRank {
    let (lo, hi) = if c1.rank() <= c2.rank() {
        (c1.rank(), c2.rank())
    } else {
        (c2.rank(), c1.rank())
    };

    if lo == hi {
        return PocketRank::Pair;
    }

    let suited = c1.suit() == c2.suit();
    let connected = hi as u8 - lo as u8 == 1
        || (lo == Rank::Deuce && hi == Rank::Ace);

    match (suited, connected) {
        (true, true) => PocketRank::ConnectedAndSuited,
        (true, false) => PocketRank::SuitedCards,
        (false, true) => PocketRank::ConnectedCards,
        (false, false) => PocketRank::HighCard,
    }
}

/// Evaluates exactly 5 cards.
fn eval_five(cards: &[Card]) -> HandRank {
    debug_assert_eq!(cards.len(), 5);

    let stats = CardStats::new(cards);
    let ranks = stats.ranks();
    let flush = stats.suit_with(5).is_some();
    let straight = ranks.count_ones() == 5 && is_straight(ranks);

    // Flush and straight must be checked together before the kinds.
    if flush && straight {
        return if ranks == ROYAL {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        };
    }

    match stats.kind() {
        kind @ (HandRank::FourOfAKind | HandRank::FullHouse) => kind,
        _ if flush => HandRank::Flush,
        _ if straight => HandRank::Straight,
        kind => kind,
    }
}
