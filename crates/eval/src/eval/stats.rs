// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit histograms with the bit vector helpers for straights.
use kibitz_cards::{Card, Rank, Suit};

use super::HandRank;

/// The ranks mask for Ten, Jack, Queen, King and Ace.
pub(crate) const ROYAL: u16 = 0b1_1111_0000_0000;

/// Maps a 13 bits ranks mask to a 14 bits vector with the Ace duplicated at
/// bit 0, so that A-2-3-4-5 is a run of five consecutive bits.
pub(crate) const fn extended(ranks: u16) -> u16 {
    (ranks << 1) | ((ranks >> 12) & 1)
}

/// Returns the extended vector with a bit set for the lowest bit of every run
/// of five consecutive ranks.
pub(crate) const fn straight_starts(ranks: u16) -> u16 {
    let v = extended(ranks);
    v & (v >> 1) & (v >> 2) & (v >> 3) & (v >> 4)
}

/// Checks if the ranks mask contains a straight.
pub(crate) const fn is_straight(ranks: u16) -> bool {
    straight_starts(ranks) != 0
}

/// The straight flush category for a suited ranks mask that contains a straight.
pub(crate) const fn straight_flush_rank(ranks: u16) -> HandRank {
    if ranks & ROYAL == ROYAL {
        HandRank::RoyalFlush
    } else {
        HandRank::StraightFlush
    }
}

/// Ranks and suits histogram for a set of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CardStats {
    counts: [u8; Rank::COUNT],
    suits: [u16; Suit::COUNT],
    ranks: u16,
}

impl CardStats {
    pub(crate) fn new(cards: &[Card]) -> Self {
        let mut stats = Self::default();
        for card in cards {
            stats.add(*card);
        }

        stats
    }

    pub(crate) fn add(&mut self, card: Card) {
        self.counts[card.rank() as usize] += 1;
        self.suits[card.suit() as usize] |= card.rank().bit();
        self.ranks |= card.rank().bit();
    }

    /// The ranks mask of all cards.
    pub(crate) fn ranks(&self) -> u16 {
        self.ranks
    }

    /// The number of cards with the given rank.
    pub(crate) fn count(&self, rank: Rank) -> u8 {
        self.counts[rank as usize]
    }

    /// The number of cards with the given rank still in the deck.
    pub(crate) fn unseen(&self, rank: Rank) -> u8 {
        (Suit::COUNT as u8).saturating_sub(self.count(rank))
    }

    /// The ranks mask for a suit.
    pub(crate) fn suit_ranks(&self, suit: Suit) -> u16 {
        self.suits[suit as usize]
    }

    pub(crate) fn suit_count(&self, suit: Suit) -> u32 {
        self.suit_ranks(suit).count_ones()
    }

    pub(crate) fn contains(&self, card: Card) -> bool {
        self.suit_ranks(card.suit()) & card.rank().bit() != 0
    }

    /// The suit with at least 4 cards, at most one suit qualifies with 7 cards.
    pub(crate) fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|&s| self.suit_count(s) >= 4)
    }

    /// The suit with exactly `n` cards.
    pub(crate) fn suit_with(&self, n: u32) -> Option<Suit> {
        Suit::suits().find(|&s| self.suit_count(s) == n)
    }

    /// The n-of-a-kind category of these cards, ignoring straights and flushes.
    pub(crate) fn kind(&self) -> HandRank {
        Self::kind_of(&self.counts)
    }

    /// The n-of-a-kind category after adding a card with the given rank.
    pub(crate) fn kind_with(&self, rank: Rank) -> HandRank {
        let mut counts = self.counts;
        counts[rank as usize] += 1;
        Self::kind_of(&counts)
    }

    fn kind_of(counts: &[u8; Rank::COUNT]) -> HandRank {
        let (mut trips, mut pairs) = (0, 0);
        for &count in counts {
            match count {
                4.. => return HandRank::FourOfAKind,
                3 => trips += 1,
                2 => pairs += 1,
                _ => {}
            }
        }

        match (trips, pairs) {
            (2.., _) | (1, 1..) => HandRank::FullHouse,
            (1, _) => HandRank::ThreeOfAKind,
            (_, 2..) => HandRank::TwoPair,
            (_, 1) => HandRank::Pair,
            _ => HandRank::HighCard,
        }
    }
}
