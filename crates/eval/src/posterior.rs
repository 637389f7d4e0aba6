// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Posterior hand rank frequencies.
//!
//! Given the known cards, counts for each [HandRank] the number of ways the
//! cards dealt on the next street make that rank. Pre-flop the next street is
//! the three flop cards, on the flop and the turn it is a single card. Every
//! unseen card combination is counted once, so the frequencies always sum to
//! the total combinations.
use serde::{Deserialize, Serialize};
use std::fmt;

use kibitz_cards::{Card, Deck, Rank, Suit};

use crate::{
    Draw, Error, Frequencies, HandRank, Result, binomial,
    eval::{
        evaluate_hand,
        stats::{CardStats, ROYAL, straight_flush_rank},
    },
};

/// A Texas Hold'em betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Only the hole cards are known.
    Preflop,
    /// Hole cards and three community cards.
    Flop,
    /// Hole cards and four community cards.
    Turn,
    /// Hole cards and all five community cards.
    River,
}

impl Street {
    /// The street for the given number of known cards.
    pub fn from_cards(count: usize) -> Result<Street> {
        match count {
            2 => Ok(Street::Preflop),
            5 => Ok(Street::Flop),
            6 => Ok(Street::Turn),
            7 => Ok(Street::River),
            n => Err(Error::InvalidHandSize(n)),
        }
    }

    /// The number of known cards on this street.
    pub fn known_cards(&self) -> usize {
        match self {
            Street::Preflop => 2,
            Street::Flop => 5,
            Street::Turn => 6,
            Street::River => 7,
        }
    }

    /// The number of community cards dealt on the next street.
    pub fn cards_to_come(&self) -> usize {
        match self {
            Street::Preflop => 3,
            Street::Flop | Street::Turn => 1,
            Street::River => 0,
        }
    }

    /// The next street.
    pub fn next(&self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// The number of ways to deal the next street.
    pub fn total_combinations(&self) -> u64 {
        let unseen = Deck::SIZE - self.known_cards();
        binomial(unseen as u64, self.cards_to_come() as u64)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        f.write_str(street)
    }
}

/// The 10 straights ranks masks, from the A-2-3-4-5 wheel to Broadway.
const STRAIGHTS: [u16; 10] = {
    let mut straights = [0; 10];
    straights[0] = 0b1_0000_0000_1111;

    let mut idx = 1;
    while idx < straights.len() {
        straights[idx] = 0b1_1111 << (idx - 1);
        idx += 1;
    }

    straights
};

/// Computes the posterior frequencies for 2, 5, 6 or 7 cards.
///
/// On the river no more cards are dealt and the table has a single
/// combination for the current rank.
pub fn posterior(cards: &[Card]) -> Result<Frequencies> {
    let street = Street::from_cards(cards.len())?;
    let mut freq = Frequencies::new(street.total_combinations());

    match (street, cards) {
        (Street::Preflop, [c1, c2]) => flop(*c1, *c2, &mut freq),
        (Street::River, _) => freq.add(evaluate_hand(cards)?, 1),
        _ => next_card(cards, &mut freq)?,
    }

    Ok(freq)
}

/// Frequencies for the three flop cards given the hole cards.
fn flop(c1: Card, c2: Card, freq: &mut Frequencies) {
    let c = binomial;

    // 3 cards left for a paired rank, 4 for the other 11 or 12 ranks.
    if c1.rank() == c2.rank() {
        let pair = c(4, 2);
        freq.add(HandRank::FourOfAKind, 48);
        freq.add(HandRank::FullHouse, 2 * 12 * pair + 12 * 4);
        freq.add(HandRank::ThreeOfAKind, 2 * (c(48, 2) - 12 * pair));
        freq.add(HandRank::TwoPair, 12 * pair * 44);
        freq.add(HandRank::Pair, c(12, 3) * 4u64.pow(3));
        return;
    }

    // Flops that pair one or both hole cards.
    freq.add(HandRank::FourOfAKind, 2);
    freq.add(HandRank::FullHouse, 2 * c(3, 2) * 3);
    freq.add(HandRank::ThreeOfAKind, 2 * c(3, 2) * 44 + 11 * c(4, 3));
    freq.add(HandRank::TwoPair, 3 * 3 * 44 + 2 * 3 * 11 * c(4, 2));
    freq.add(HandRank::Pair, 2 * 3 * c(11, 2) * 16 + 11 * c(4, 2) * 40);

    // Flops with three other distinct ranks, a straight needs the hole cards
    // ranks in the same straight window with the flop filling the others.
    let hole = c1.rank().bit() | c2.rank().bit();
    let windows = STRAIGHTS.iter().filter(|&&s| s & hole == hole).count() as u64;
    let unpaired = c(11, 3) * 4u64.pow(3);

    if c1.suit() == c2.suit() {
        let royal = u64::from(ROYAL & hole == hole);
        freq.add(HandRank::RoyalFlush, royal);
        freq.add(HandRank::StraightFlush, windows - royal);
        freq.add(HandRank::Flush, c(11, 3) - windows);
        freq.add(HandRank::Straight, windows * (4u64.pow(3) - 1));
        freq.add(
            HandRank::HighCard,
            unpaired - windows * 4u64.pow(3) - (c(11, 3) - windows),
        );
    } else {
        freq.add(HandRank::Straight, windows * 4u64.pow(3));
        freq.add(HandRank::HighCard, unpaired - windows * 4u64.pow(3));
    }
}

/// Frequencies for the turn or river card given 5 or 6 cards.
fn next_card(cards: &[Card], freq: &mut Frequencies) -> Result<()> {
    let current = evaluate_hand(cards)?;
    let stats = CardStats::new(cards);
    let total = freq.total();

    match current {
        HandRank::RoyalFlush | HandRank::FourOfAKind => {
            freq.add(current, total);
        }
        HandRank::StraightFlush => {
            // Improves only when the suit misses a single royal rank.
            let royal = stats
                .flush_suit()
                .map(|s| stats.suit_ranks(s))
                .is_some_and(|r| (ROYAL & !r).count_ones() == 1);
            let royal = u64::from(royal);
            freq.add(HandRank::RoyalFlush, royal);
            freq.add(HandRank::StraightFlush, total - royal);
        }
        HandRank::FullHouse => {
            // The last card of a three of a kind rank.
            let quads = Rank::ranks().filter(|&r| stats.count(r) == 3).count() as u64;
            freq.add(HandRank::FourOfAKind, quads);
            freq.add(HandRank::FullHouse, total - quads);
        }
        _ => {
            let draw = Draw::detect(cards)?;
            for rank in Rank::ranks() {
                next_rank(&stats, &draw, current, rank, freq);
            }
        }
    }

    Ok(())
}

/// Adds the frequencies for the unseen cards of a rank.
///
/// All the cards of a rank make the same hand, except the flush suit card
/// that can make a flush or a straight flush.
fn next_rank(
    stats: &CardStats,
    draw: &Draw,
    current: HandRank,
    rank: Rank,
    freq: &mut Frequencies,
) {
    let mut unseen = u64::from(stats.unseen(rank));
    if unseen == 0 {
        return;
    }

    let mut made = current.max(stats.kind_with(rank));
    if draw.completes_straight(rank) {
        made = made.max(HandRank::Straight);
    }

    if let Some(suit) = draw.flush_suit() {
        let card = Card::new(rank, suit);
        if !stats.contains(card) {
            freq.add(suited_rank(stats, draw, made, suit, rank), 1);
            unseen -= 1;
        }
    }

    freq.add(made, unseen);
}

fn suited_rank(
    stats: &CardStats,
    draw: &Draw,
    made: HandRank,
    suit: Suit,
    rank: Rank,
) -> HandRank {
    let made = made.max(HandRank::Flush);
    if draw.completes_straight_flush(rank) {
        made.max(straight_flush_rank(stats.suit_ranks(suit) | rank.bit()))
    } else {
        made
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibitz_cards::parse_cards;
    use rand::prelude::*;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    /// Frequencies by dealing every combination of the next street cards.
    fn brute_force(cards: &[Card]) -> Frequencies {
        let street = Street::from_cards(cards.len()).unwrap();

        let mut deck = Deck::default();
        for card in cards {
            deck.remove(*card);
        }

        let mut counts = [0u64; HandRank::COUNT];
        if street == Street::River {
            counts[evaluate_hand(cards).unwrap() as usize] = 1;
            return Frequencies::from_counts(counts);
        }

        let mut hand = cards.to_vec();
        deck.for_each(street.cards_to_come(), |next| {
            hand.truncate(cards.len());
            hand.extend_from_slice(next);
            counts[evaluate_hand(&hand).unwrap() as usize] += 1;
        });

        Frequencies::from_counts(counts)
    }

    fn check_cards(cards: &[Card]) -> Frequencies {
        let freq = posterior(cards).unwrap();
        assert_eq!(freq.sum(), freq.total(), "{cards:?}");
        assert_eq!(freq, brute_force(cards), "{cards:?}");
        freq
    }

    fn check(s: &str) -> Frequencies {
        check_cards(&cards(s))
    }

    #[test]
    fn street() {
        assert_eq!(Street::from_cards(2), Ok(Street::Preflop));
        assert_eq!(Street::from_cards(7), Ok(Street::River));
        assert_eq!(Street::from_cards(3), Err(Error::InvalidHandSize(3)));
        assert_eq!(Street::Preflop.total_combinations(), 19_600);
        assert_eq!(Street::Flop.total_combinations(), 47);
        assert_eq!(Street::Turn.total_combinations(), 46);
        assert_eq!(Street::River.total_combinations(), 1);
        assert_eq!(Street::Flop.next(), Some(Street::Turn));
        assert_eq!(Street::River.next(), None);
        assert_eq!(Street::Turn.to_string(), "Turn");

        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            assert_eq!(Street::from_cards(street.known_cards()), Ok(street));
        }
    }

    #[test]
    fn straight_windows() {
        assert_eq!(STRAIGHTS[0], Rank::Ace.bit() | 0b1111);
        assert_eq!(STRAIGHTS[9], ROYAL);
        assert!(STRAIGHTS.iter().all(|s| s.count_ones() == 5));
    }

    #[test]
    fn gutshot() {
        let freq = check("2c 3s 5c 6h Qh");
        assert_eq!(freq.total(), 47);
        assert_eq!(freq[HandRank::Straight], 4);
        assert_eq!(freq[HandRank::Pair], 15);
        assert_eq!(freq[HandRank::HighCard], 28);
    }

    #[test]
    fn straight_flush_to_royal() {
        let freq = check("9c Tc Jc Qc Kc");
        assert_eq!(freq.total(), 47);
        assert_eq!(freq[HandRank::RoyalFlush], 1);
        assert_eq!(freq[HandRank::StraightFlush], 46);

        // A lower straight flush cannot become royal.
        let freq = check("8c 9c Tc Jc Qc");
        assert_eq!(freq[HandRank::RoyalFlush], 0);
        assert_eq!(freq[HandRank::StraightFlush], 47);

        // Six cards with four royal ranks, the missing one is not on top.
        for hand in ["8s 9s Ts Js Qs As", "9d Td Jd Qd Ad 8d", "Qs Js 8s Ts As 9s"] {
            let freq = check(hand);
            assert_eq!(freq.total(), 46);
            assert_eq!(freq[HandRank::RoyalFlush], 1, "{hand}");
            assert_eq!(freq[HandRank::StraightFlush], 45, "{hand}");
        }

        let freq = check("7h 8h 9h Th Jh Ah");
        assert_eq!(freq[HandRank::RoyalFlush], 0);
        assert_eq!(freq[HandRank::StraightFlush], 46);
    }

    #[test]
    fn made_hands() {
        let freq = check("2c 2s 2d 2h 5d");
        assert_eq!(freq[HandRank::FourOfAKind], 47);

        let freq = check("2c 2s 2d 2h 5d 7c");
        assert_eq!(freq[HandRank::FourOfAKind], 46);
        assert_eq!(freq.sum(), 46);

        let freq = check("Tc Jc Qc Kc Ac");
        assert_eq!(freq[HandRank::RoyalFlush], 47);

        let freq = check("2c 2s 2d 5h 5d");
        assert_eq!(freq[HandRank::FourOfAKind], 1);
        assert_eq!(freq[HandRank::FullHouse], 46);

        let freq = check("2c 2s 2d 5h 5d 5c");
        assert_eq!(freq[HandRank::FourOfAKind], 2);
        assert_eq!(freq[HandRank::FullHouse], 44);
    }

    #[test]
    fn three_of_a_kind() {
        let freq = check("2c 2s 2d 5h 9d");
        assert_eq!(freq[HandRank::FourOfAKind], 1);
        assert_eq!(freq[HandRank::FullHouse], 6);
        assert_eq!(freq[HandRank::ThreeOfAKind], 40);
    }

    // Ah and 6h both make a straight flush here, a single straight flush out
    // would miss one of them.
    #[test]
    fn six_cards_straight_flush_draw() {
        let freq = check("2h 2s 6c 3h 4h 5h");
        assert_eq!(freq.total(), 46);
        assert_eq!(freq[HandRank::StraightFlush], 2);
        assert_eq!(freq[HandRank::Flush], 7);
        assert_eq!(freq[HandRank::Straight], 37);
    }

    #[test]
    fn ace_draws() {
        check("Ac 2c 3c 4c 9d");
        check("Ac 2c 3c 4c 9d Kd");
        check("Ah Kh Qh Jh 2c");
        check("Ah Kh Qh Jh 2c 3d");
        check("Th Jh Qh Kh 9h 2c");
        check("Ad 2s 3c 4h 5d 5c");
        check("Qh Kh Ah 2h 3h 9c");
    }

    #[test]
    fn flop_frequencies() {
        for pocket in [
            "2c 2s", "6c 8s", "6c 8c", "Ac Kc", "Ac 2c", "Ad 2s", "Th Ah", "4d Ad", "9s 5s",
        ] {
            let freq = check(pocket);
            assert_eq!(freq.total(), 19_600);
        }

        let freq = posterior(&cards("Ac Kc")).unwrap();
        assert_eq!(freq[HandRank::RoyalFlush], 1);
        assert_eq!(freq[HandRank::StraightFlush], 0);

        let freq = posterior(&cards("2c 2s")).unwrap();
        assert_eq!(freq[HandRank::FourOfAKind], 48);
        assert_eq!(freq[HandRank::Flush], 0);
    }

    #[test]
    fn river() {
        let freq = check("Ah Kd 2c 7h 9s 4d Jc");
        assert_eq!(freq.total(), 1);
        assert_eq!(freq[HandRank::HighCard], 1);
    }

    #[test]
    fn hand_size() {
        let cards = cards("Ah Kd 2c 7h 9s 4d Jc 8c");
        for n in [0, 1, 3, 4, 8] {
            assert_eq!(posterior(&cards[..n]), Err(Error::InvalidHandSize(n)));
        }
    }

    #[test]
    fn random_hands() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            for n in [5, 6, 7] {
                check_cards(&cards[..n]);
            }
        }
    }

    // Draw heavy hands, cards from a few consecutive ranks and suits.
    #[test]
    fn random_draws() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let lo = rng.random_range(0..9);
            let mut suits = Suit::suits().collect::<Vec<_>>();
            suits.shuffle(&mut rng);
            suits.truncate(rng.random_range(1..=3));

            let mut pool = (lo..lo + 6)
                .filter_map(Rank::from_index)
                .flat_map(|r| suits.iter().map(move |s| Card::new(r, *s)))
                .collect::<Vec<_>>();
            pool.push(Card::new(Rank::Ace, suits[0]));
            pool.sort();
            pool.dedup();
            pool.shuffle(&mut rng);

            for n in [5, 6] {
                if pool.len() >= n {
                    check_cards(&pool[..n]);
                }
            }
        }
    }

    // Brute force check of all the preflop hands.
    #[test]
    #[ignore]
    fn all_flops() {
        Deck::default().for_each(2, |pocket| {
            let freq = posterior(pocket).unwrap();
            assert_eq!(freq, brute_force(pocket), "{pocket:?}");
        });
    }
}
