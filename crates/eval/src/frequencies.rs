// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rank frequencies table.
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::HandRank;

/// The number of card combinations for each hand rank out of a total.
///
/// A complete table has the sum of all the frequencies equal to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequencies {
    counts: [u64; HandRank::COUNT],
    total: u64,
}

impl Frequencies {
    /// Creates an empty table for the given total combinations.
    pub fn new(total: u64) -> Self {
        Self {
            counts: [0; HandRank::COUNT],
            total,
        }
    }

    /// Creates a table from the frequencies with a total equal to their sum.
    pub fn from_counts(counts: [u64; HandRank::COUNT]) -> Self {
        Self {
            counts,
            total: counts.iter().sum(),
        }
    }

    /// The frequency for a rank.
    pub fn get(&self, rank: HandRank) -> u64 {
        self.counts[rank as usize]
    }

    /// The total number of combinations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The sum of all the frequencies.
    pub fn sum(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The probability for a rank, zero for an empty table.
    pub fn probability(&self, rank: HandRank) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.get(rank) as f64 / self.total as f64
        }
    }

    /// Returns the ranks with their frequency, from the weakest rank.
    pub fn iter(&self) -> impl Iterator<Item = (HandRank, u64)> {
        HandRank::ranks().zip(self.counts)
    }

    pub(crate) fn add(&mut self, rank: HandRank, count: u64) {
        self.counts[rank as usize] += count;
    }
}

impl Index<HandRank> for Frequencies {
    type Output = u64;

    fn index(&self, rank: HandRank) -> &Self::Output {
        &self.counts[rank as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies() {
        let mut f = Frequencies::new(47);
        f.add(HandRank::StraightFlush, 46);
        f.add(HandRank::RoyalFlush, 1);

        assert_eq!(f.total(), 47);
        assert_eq!(f.sum(), 47);
        assert_eq!(f[HandRank::RoyalFlush], 1);
        assert_eq!(f.get(HandRank::Pair), 0);
        assert!((f.probability(HandRank::RoyalFlush) - 1.0 / 47.0).abs() < 1e-12);

        let ranks = f
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(r, _)| r)
            .collect::<Vec<_>>();
        assert_eq!(ranks, vec![HandRank::StraightFlush, HandRank::RoyalFlush]);

        assert_eq!(Frequencies::default().probability(HandRank::Pair), 0.0);

        let f = Frequencies::from_counts([1, 2, 3, 0, 0, 0, 0, 0, 0, 4]);
        assert_eq!(f.total(), 10);
        assert_eq!(f[HandRank::TwoPair], 3);
    }
}
