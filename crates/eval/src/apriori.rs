// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A-priori hand rank frequencies.
//!
//! The number of 2, 5, 6 and 7 cards hands out of a 52 cards deck for each
//! ranking. The 2, 5 and 6 cards tables are computed at compile time by
//! counting the suit assignments of each ranks mask, the 7 cards table has
//! the well known values that are checked by enumerating all the hands.
use crate::{
    Error, HandRank, PocketRank, Ranking, Result, binomial,
    eval::stats::{is_straight, straight_flush_rank},
};

/// Number of two cards hands for each [PocketRank].
pub const POCKET_CARDS: [u64; PocketRank::COUNT] = pocket_cards();

/// Number of five cards hands for each [HandRank].
pub const FIVE_CARDS: [u64; HandRank::COUNT] = five_cards();

/// Number of six cards hands for each [HandRank].
pub const SIX_CARDS: [u64; HandRank::COUNT] = six_cards();

/// Number of seven cards hands for each [HandRank].
pub const SEVEN_CARDS: [u64; HandRank::COUNT] = [
    23_294_460, 58_627_800, 31_433_400, 6_461_620, 6_180_020, 4_047_644, 3_473_184, 224_848,
    37_260, 4_324,
];

/// Returns the number of hands with `size` cards that have the given ranking.
///
/// A pocket ranking has no hands with more than 2 cards and a hand ranking
/// has no 2 cards hands.
pub fn frequency(size: usize, ranking: Ranking) -> Result<u64> {
    let count = match (size, ranking) {
        (2, Ranking::Pocket(rank)) => POCKET_CARDS[rank as usize],
        (5, Ranking::Hand(rank)) => FIVE_CARDS[rank as usize],
        (6, Ranking::Hand(rank)) => SIX_CARDS[rank as usize],
        (7, Ranking::Hand(rank)) => SEVEN_CARDS[rank as usize],
        (2 | 5 | 6 | 7, _) => 0,
        (n, _) => return Err(Error::InvalidHandSize(n)),
    };

    Ok(count)
}

/// Returns the number of hands with `size` cards.
pub fn total_combinations(size: usize) -> Result<u64> {
    match size {
        2 | 5 | 6 | 7 => Ok(binomial(52, size as u64)),
        n => Err(Error::InvalidHandSize(n)),
    }
}

/// Returns the probability of a ranking among all hands with `size` cards.
pub fn probability(size: usize, ranking: Ranking) -> Result<f64> {
    Ok(frequency(size, ranking)? as f64 / total_combinations(size)? as f64)
}

const fn pocket_cards() -> [u64; PocketRank::COUNT] {
    let mut table = [0; PocketRank::COUNT];

    // 12 adjacent ranks pairs plus the Ace with the Deuce.
    let connected = 13;
    let unpaired = binomial(13, 2);

    table[PocketRank::Pair as usize] = 13 * binomial(4, 2);
    table[PocketRank::ConnectedAndSuited as usize] = connected * 4;
    table[PocketRank::ConnectedCards as usize] = connected * 12;
    table[PocketRank::SuitedCards as usize] = (unpaired - connected) * 4;
    table[PocketRank::HighCard as usize] = (unpaired - connected) * 12;
    table
}

const fn five_cards() -> [u64; HandRank::COUNT] {
    let mut table = [0; HandRank::COUNT];

    // Five distinct ranks, 4^5 suits assignments of which 4 are flushes.
    let suits = 4u64.pow(5);
    let mut ranks = 0u16;
    while ranks < 1 << 13 {
        if ranks.count_ones() == 5 {
            if is_straight(ranks) {
                table[straight_flush_rank(ranks) as usize] += 4;
                table[HandRank::Straight as usize] += suits - 4;
            } else {
                table[HandRank::Flush as usize] += 4;
                table[HandRank::HighCard as usize] += suits - 4;
            }
        }

        ranks += 1;
    }

    let pair = binomial(4, 2);
    let trips = binomial(4, 3);

    table[HandRank::Pair as usize] = 13 * pair * binomial(12, 3) * 4u64.pow(3);
    table[HandRank::TwoPair as usize] = binomial(13, 2) * pair * pair * 44;
    table[HandRank::ThreeOfAKind as usize] = 13 * trips * binomial(12, 2) * 4u64.pow(2);
    table[HandRank::FullHouse as usize] = 13 * trips * 12 * pair;
    table[HandRank::FourOfAKind as usize] = 13 * 48;
    table
}

const fn six_cards() -> [u64; HandRank::COUNT] {
    let mut table = [0; HandRank::COUNT];

    let mut ranks = 0u16;
    while ranks < 1 << 13 {
        match ranks.count_ones() {
            5 => {
                // A pair and four single cards, 5 ways to choose the paired
                // rank. Flushes have the four singles and one of the pair in
                // the same suit: 4 suits times 3 suits for the other pair card.
                let suits = binomial(4, 2) * 4u64.pow(4);
                let flushes = 4 * 3;
                if is_straight(ranks) {
                    table[straight_flush_rank(ranks) as usize] += 5 * flushes;
                    table[HandRank::Straight as usize] += 5 * (suits - flushes);
                } else {
                    table[HandRank::Flush as usize] += 5 * flushes;
                    table[HandRank::Pair as usize] += 5 * (suits - flushes);
                }
            }
            6 => {
                // Six suited cards or five suited cards and one of 3 other
                // suits for the sixth card.
                let suits = 4u64.pow(6);
                let flushes = 4 + 4 * 6 * 3;

                let mut straight_flushes = 0;
                if is_straight(ranks) {
                    table[straight_flush_rank(ranks) as usize] += 4;
                    straight_flushes += 4;
                }

                let mut bit = 0u16;
                while bit < 13 {
                    let suited = ranks & !(1 << bit);
                    if suited != ranks && is_straight(suited) {
                        table[straight_flush_rank(suited) as usize] += 4 * 3;
                        straight_flushes += 4 * 3;
                    }

                    bit += 1;
                }

                table[HandRank::Flush as usize] += flushes - straight_flushes;
                if is_straight(ranks) {
                    table[HandRank::Straight as usize] += suits - flushes;
                } else {
                    table[HandRank::HighCard as usize] += suits - flushes;
                }
            }
            _ => {}
        }

        ranks += 1;
    }

    let pair = binomial(4, 2);
    let trips = binomial(4, 3);

    table[HandRank::TwoPair as usize] = binomial(13, 2) * binomial(11, 2) * pair * pair * 16
        + binomial(13, 3) * pair * pair * pair;
    table[HandRank::ThreeOfAKind as usize] = 13 * trips * binomial(12, 3) * 4u64.pow(3);
    table[HandRank::FullHouse as usize] =
        13 * trips * 12 * pair * 11 * 4 + binomial(13, 2) * trips * trips;
    table[HandRank::FourOfAKind as usize] = 13 * binomial(12, 2) * 16 + 13 * 12 * pair;
    table
}
