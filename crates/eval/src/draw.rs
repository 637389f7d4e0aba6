// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight and flush draws detection.
//!
//! A hand with 5 or 6 cards is a draw when it is one card away from a 5 cards
//! straight or flush. Straight draws are found by matching the ranks bit vector
//! against a set of adjacency patterns where each zero bit is a rank that
//! completes the straight:
//!
//! ```text
//! 011110  open ended, two completing ranks
//!  11110  one completing rank below
//!  01111  one completing rank above
//!  10111  gutshots
//!  11011
//!  11101
//! ```
//!
//! The ranks vector has the Ace bit duplicated below the Deuce so that the
//! patterns also find the A-2-3-4-5 draws.
use log::trace;

use kibitz_cards::{Card, Rank, Suit};

use crate::{
    Error, Result,
    eval::stats::{CardStats, extended},
};

/// Draw patterns with their width, zero bits are the completing ranks.
const DRAW_PATTERNS: [(u16, u32); 6] = [
    (0b01_1110, 6),
    (0b1_1110, 5),
    (0b0_1111, 5),
    (0b1_0111, 5),
    (0b1_1011, 5),
    (0b1_1101, 5),
];

/// Width of the extended ranks vector.
const EXTENDED_BITS: u32 = 14;

/// Returns the ranks mask of the ranks that would complete a straight when
/// added to the given ranks mask.
pub(crate) const fn completing_ranks(ranks: u16) -> u16 {
    let v = extended(ranks);
    let mut completing = 0;

    let mut idx = 0;
    while idx < DRAW_PATTERNS.len() {
        let (pattern, width) = DRAW_PATTERNS[idx];
        let full = (1 << width) - 1;

        let mut shift = 0;
        while shift + width <= EXTENDED_BITS {
            if (v >> shift) & full == pattern {
                // Map the extended holes back to ranks, bit 0 is the Ace.
                let holes = (!pattern & full) << shift;
                completing |= (holes >> 1) | ((holes & 1) << 12);
            }

            shift += 1;
        }

        idx += 1;
    }

    completing & !ranks
}

/// The draw signals for 5 cards.
#[derive(Debug, Clone, Copy, Default)]
struct Signals {
    flush_draw: bool,
    straight_draw: bool,
    straight_flush_draw: bool,
}

impl Signals {
    fn scan(stats: &CardStats) -> Self {
        let flush_suit = stats.suit_with(4);
        Self {
            flush_draw: flush_suit.is_some(),
            straight_draw: completing_ranks(stats.ranks()) != 0,
            straight_flush_draw: flush_suit
                .is_some_and(|s| completing_ranks(stats.suit_ranks(s)) != 0),
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            flush_draw: self.flush_draw || other.flush_draw,
            straight_draw: self.straight_draw || other.straight_draw,
            straight_flush_draw: self.straight_flush_draw || other.straight_flush_draw,
        }
    }
}

/// Straight and flush draws for a 5 or 6 cards hand.
///
/// The outs are the unseen cards that would make at least a straight or a
/// flush with the next card, each out is counted once under the strongest
/// category it makes:
///
/// - straight flush outs, the flush suit cards that complete a straight flush,
/// - flush outs, all the other unseen cards of the flush suit,
/// - straight outs, the other unseen cards that complete a straight.
///
/// Hands that already hold a straight or a flush still report the outs for
/// that category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draw {
    flush_draw: bool,
    straight_draw: bool,
    straight_flush_draw: bool,
    flush_suit: Option<Suit>,
    straight_ranks: u16,
    straight_flush_ranks: u16,
    straight_flush_outs: u32,
    flush_outs: u32,
    straight_outs: u32,
}

impl Draw {
    /// Detects the draws for 5 or 6 cards.
    ///
    /// A 6 cards hand is a draw if any of its 5 cards subsets is, so a hand
    /// can be a straight draw without one card and a flush draw without
    /// another card.
    pub fn detect(cards: &[Card]) -> Result<Self> {
        let signals = match cards.len() {
            5 => Signals::scan(&CardStats::new(cards)),
            6 => (0..cards.len())
                .map(|skip| {
                    let mut stats = CardStats::default();
                    cards
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != skip)
                        .for_each(|(_, c)| stats.add(*c));
                    Signals::scan(&stats)
                })
                .fold(Signals::default(), Signals::union),
            n => return Err(Error::InvalidHandSize(n)),
        };

        let draw = Self::with_signals(&CardStats::new(cards), signals);
        trace!(
            "Draw for {} cards: flush {} straight {} straight flush {} outs {}",
            cards.len(),
            draw.flush_draw,
            draw.straight_draw,
            draw.straight_flush_draw,
            draw.out_count()
        );

        Ok(draw)
    }

    /// Completing ranks and outs are computed on all the cards, a rank that
    /// completes a straight for a subset also completes it for the full hand.
    fn with_signals(stats: &CardStats, signals: Signals) -> Self {
        let flush_suit = stats.flush_suit();
        let straight_ranks = completing_ranks(stats.ranks());
        let straight_flush_ranks = flush_suit
            .map(|s| completing_ranks(stats.suit_ranks(s)))
            .unwrap_or_default();

        let straight_flush_outs = straight_flush_ranks.count_ones();
        let (flush_outs, unsuited) = match flush_suit {
            Some(s) => (
                Rank::COUNT as u32 - stats.suit_count(s) - straight_flush_outs,
                Suit::COUNT as u32 - 1,
            ),
            None => (0, Suit::COUNT as u32),
        };

        // Completing ranks are not in the hand, all their cards are unseen.
        let straight_outs = straight_ranks.count_ones() * unsuited;

        Self {
            flush_draw: signals.flush_draw,
            straight_draw: signals.straight_draw,
            straight_flush_draw: signals.straight_flush_draw,
            flush_suit,
            straight_ranks,
            straight_flush_ranks,
            straight_flush_outs,
            flush_outs,
            straight_outs,
        }
    }

    /// Checks if exactly four cards have the same suit.
    pub fn is_flush_draw(&self) -> bool {
        self.flush_draw
    }

    /// Checks if the ranks match an open ended or gutshot pattern.
    pub fn is_straight_draw(&self) -> bool {
        self.straight_draw
    }

    /// Checks if the four flush suit cards are a straight draw.
    pub fn is_straight_flush_draw(&self) -> bool {
        self.straight_flush_draw
    }

    /// The suit with at least four cards.
    pub fn flush_suit(&self) -> Option<Suit> {
        self.flush_suit
    }

    /// Returns the ranks that complete a straight.
    pub fn straight_ranks(&self) -> impl Iterator<Item = Rank> {
        ranks_of(self.straight_ranks)
    }

    /// Returns the ranks that complete a straight flush in the flush suit.
    pub fn straight_flush_ranks(&self) -> impl Iterator<Item = Rank> {
        ranks_of(self.straight_flush_ranks)
    }

    /// Checks if a card of this rank completes a straight.
    pub fn completes_straight(&self, rank: Rank) -> bool {
        self.straight_ranks & rank.bit() != 0
    }

    /// Checks if the flush suit card of this rank completes a straight flush.
    pub fn completes_straight_flush(&self, rank: Rank) -> bool {
        self.straight_flush_ranks & rank.bit() != 0
    }

    /// Number of cards that complete a straight flush.
    pub fn straight_flush_outs(&self) -> u32 {
        self.straight_flush_outs
    }

    /// Number of flush suit cards that do not complete a straight flush.
    pub fn flush_outs(&self) -> u32 {
        self.flush_outs
    }

    /// Number of cards that complete a straight and are not flush outs.
    pub fn straight_outs(&self) -> u32 {
        self.straight_outs
    }

    /// Number of distinct out cards.
    pub fn out_count(&self) -> u32 {
        self.straight_flush_outs + self.flush_outs + self.straight_outs
    }
}

fn ranks_of(mask: u16) -> impl Iterator<Item = Rank> {
    Rank::ranks().filter(move |r| mask & r.bit() != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibitz_cards::parse_cards;

    fn draw(s: &str) -> Draw {
        Draw::detect(&parse_cards(s).unwrap()).unwrap()
    }

    fn ranks(s: &str) -> u16 {
        s.chars()
            .filter_map(Rank::from_char)
            .fold(0, |mask, r| mask | r.bit())
    }

    #[test]
    fn completing_patterns() {
        // Open ended.
        assert_eq!(completing_ranks(ranks("5678")), ranks("49"));
        // Gutshots.
        assert_eq!(completing_ranks(ranks("5689")), ranks("7"));
        assert_eq!(completing_ranks(ranks("5789")), ranks("6"));
        assert_eq!(completing_ranks(ranks("5679")), ranks("8"));
        // Double gutshot.
        assert_eq!(completing_ranks(ranks("35679")), ranks("48"));
        // Ace low and high.
        assert_eq!(completing_ranks(ranks("A234")), ranks("5"));
        assert_eq!(completing_ranks(ranks("A235")), ranks("4"));
        assert_eq!(completing_ranks(ranks("2345")), ranks("A6"));
        assert_eq!(completing_ranks(ranks("JQKA")), ranks("T"));
        assert_eq!(completing_ranks(ranks("TQKA")), ranks("J"));
        // No wrap around.
        assert_eq!(completing_ranks(ranks("QKA2")), 0);
        assert_eq!(completing_ranks(ranks("2356Q")), ranks("4"));
        assert_eq!(completing_ranks(ranks("27TK")), 0);
    }

    #[test]
    fn draw_gutshot() {
        let d = draw("2c 3s 5c 6h Qh");
        assert!(d.is_straight_draw());
        assert!(!d.is_flush_draw());
        assert!(!d.is_straight_flush_draw());
        assert_eq!(d.straight_ranks().collect::<Vec<_>>(), vec![Rank::Four]);
        assert_eq!(d.straight_outs(), 4);
        assert_eq!(d.out_count(), 4);
        assert_eq!(d.flush_suit(), None);
    }

    #[test]
    fn draw_flush() {
        let d = draw("2c 7c 9c Kc Ad");
        assert!(d.is_flush_draw());
        assert!(!d.is_straight_draw());
        assert_eq!(d.flush_suit(), Some(Suit::Clubs));
        assert_eq!(d.flush_outs(), 9);
        assert_eq!(d.out_count(), 9);
    }

    #[test]
    fn draw_open_ended_flush() {
        let d = draw("5h 6h 7h 8h Kd");
        assert!(d.is_flush_draw());
        assert!(d.is_straight_draw());
        assert!(d.is_straight_flush_draw());
        assert_eq!(
            d.straight_flush_ranks().collect::<Vec<_>>(),
            vec![Rank::Four, Rank::Nine]
        );
        assert_eq!(d.straight_flush_outs(), 2);
        assert_eq!(d.flush_outs(), 7);
        assert_eq!(d.straight_outs(), 6);
        assert_eq!(d.out_count(), 15);
    }

    #[test]
    fn draw_straight_not_in_suit() {
        // Straight draw and flush draw on different cards.
        let d = draw("5h 6h 7c 8h Kh");
        assert!(d.is_flush_draw());
        assert!(d.is_straight_draw());
        assert!(!d.is_straight_flush_draw());
        assert_eq!(d.straight_flush_outs(), 0);
        assert_eq!(d.flush_outs(), 9);
        assert_eq!(d.straight_outs(), 6);
    }

    #[test]
    fn draw_six_cards() {
        let d = draw("2h 2s 6c 3h 4h 5h");
        assert!(d.is_flush_draw());
        assert!(d.is_straight_draw());
        assert!(d.is_straight_flush_draw());

        // Both the Ace and the Six of hearts make a straight flush, so this is
        // 2 straight flush outs and not 1.
        assert_eq!(
            d.straight_flush_ranks().collect::<Vec<_>>(),
            vec![Rank::Six, Rank::Ace]
        );
        assert_eq!(d.straight_flush_outs(), 2);
        assert_eq!(d.flush_outs(), 7);
        assert_eq!(d.straight_ranks().collect::<Vec<_>>(), vec![Rank::Seven, Rank::Ace]);
        assert_eq!(d.straight_outs(), 6);

        // Straight and flush draws on different cards.
        let d = draw("7c 8c 9d Jc Kd 2c");
        assert!(d.is_flush_draw());
        assert!(d.is_straight_draw());
        assert!(!d.is_straight_flush_draw());
        assert_eq!(d.straight_ranks().collect::<Vec<_>>(), vec![Rank::Ten]);
        assert_eq!(d.out_count(), 12);

        // Six suited cards are not a draw.
        let d = draw("2h 5h 7h 9h Jh Kh");
        assert!(!d.is_flush_draw());
        assert!(!d.is_straight_draw());
        assert_eq!(d.flush_suit(), Some(Suit::Hearts));
    }

    #[test]
    fn draw_hand_size() {
        let cards = parse_cards("2h 2s 6c 3h 4h 5h 9d").unwrap();
        assert_eq!(Draw::detect(&cards), Err(Error::InvalidHandSize(7)));
        assert_eq!(Draw::detect(&cards[..4]), Err(Error::InvalidHandSize(4)));
        assert_eq!(Draw::detect(&cards[..2]), Err(Error::InvalidHandSize(2)));
    }
}
