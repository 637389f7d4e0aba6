// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Error returned when a card token or name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// The token is not made of exactly two chars.
    #[error("invalid card {0:?}, expected a rank char followed by a suit char")]
    InvalidLength(String),
    /// The first char is not a rank.
    #[error("invalid rank {0:?} in card {1:?}")]
    InvalidRank(char, String),
    /// The second char is not a lowercase suit.
    #[error("invalid suit {0:?} in card {1:?}")]
    InvalidSuit(char, String),
    /// Unknown full rank name.
    #[error("unknown rank name {0:?}")]
    UnknownRankName(String),
    /// Unknown full suit name.
    #[error("unknown suit name {0:?}")]
    UnknownSuitName(String),
}

/// A Poker card.
///
/// Cards are ordered by rank first and then by suit, so that sorting a hand
/// puts it in ascending rank order.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Creates a card from its full rank and suit names, e.g. `("Ace", "Hearts")`.
    pub fn from_names(rank: &str, suit: &str) -> Result<Card, ParseCardError> {
        Ok(Card::new(Rank::from_name(rank)?, Suit::from_name(suit)?))
    }

    /// Returns the card rank.
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// A unique index in 0..52 for this card.
    pub const fn index(&self) -> usize {
        self.suit as usize * Rank::COUNT + self.rank as usize
    }

    /// The card full name, e.g. "Ace of Hearts".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidLength(s.to_string()));
        };

        let rank =
            Rank::from_char(r).ok_or_else(|| ParseCardError::InvalidRank(r, s.to_string()))?;
        let suit =
            Suit::from_char(c).ok_or_else(|| ParseCardError::InvalidSuit(c, s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespaces or commas, e.g. "Ah Kd, Tc".
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse::<Card>)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for an index in 0..13.
    pub fn from_index(index: usize) -> Option<Rank> {
        Self::ALL.get(index).copied()
    }

    /// The rank bit in a 13 bits ranks mask, deuce is bit 0.
    pub const fn bit(&self) -> u16 {
        1 << *self as u16
    }

    /// Parses a rank char, e.g. 'T' or 'A'.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// Parses a full rank name, numbers are used for the pip cards.
    pub fn from_name(name: &str) -> Result<Rank, ParseCardError> {
        Self::ranks()
            .find(|r| r.name() == name)
            .ok_or_else(|| ParseCardError::UnknownRankName(name.to_string()))
    }

    /// The rank full name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a lowercase suit char.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Parses a full suit name.
    pub fn from_name(name: &str) -> Result<Suit, ParseCardError> {
        Self::suits()
            .find(|s| s.name() == name)
            .ok_or_else(|| ParseCardError::UnknownSuitName(name.to_string()))
    }

    /// The suit full name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards combination of the cards left
    /// in the deck, combinations are generated in lexicographic order of the
    /// deck positions.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        let mut hand = [self.cards[0]; 7];
        loop {
            for i in 0..k {
                hand[i] = self.cards[pos[i]];
            }

            f(&hand[..k]);

            // Rightmost position that has not reached its last value.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                return;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
