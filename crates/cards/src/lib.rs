// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kibitz Poker cards types.
//!
//! This crate define types to create cards, either from their rank and suit:
//!
//! ```
//! # use kibitz_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = Card::new(Rank::Ten, Suit::Diamonds);
//! ```
//!
//! or from the two characters notation used by hand histories, a rank char
//! followed by a lowercase suit char:
//!
//! ```
//! # use kibitz_cards::{Card, Rank, Suit, parse_cards};
//! let ah = "Ah".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//!
//! let board = parse_cards("Tc Jc, Qc").unwrap();
//! assert_eq!(board.len(), 3);
//! assert!("AH".parse::<Card>().is_err());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use kibitz_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to iterate all the turn cards for a known flop and hole cards:
//!
//! ```
//! # use kibitz_cards::{Deck, parse_cards};
//! let mut deck = Deck::default();
//! for card in parse_cards("Ah Kh 2c 7d Ts").unwrap() {
//!     deck.remove(card);
//! }
//!
//! let mut counter = 0;
//! deck.for_each(1, |_| counter += 1);
//! assert_eq!(counter, 47);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
