// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kibitz Poker hand evaluator and odds calculator.
//!
//! Given the known cards of a Texas Hold'em hand (2 hole cards, or hole cards
//! and 3, 4 or 5 community cards) this crate computes:
//!
//! - the hand [Ranking], the best five cards category for 5, 6 and 7 cards
//!   hands or a [PocketRank] for the hole cards,
//! - the [apriori] probability of that ranking among all the hands with the
//!   same number of cards,
//! - the [posterior] frequencies of every [HandRank] after the next street is
//!   dealt, with straight and flush draws from the [draw] detector.
//!
//! All the numbers are exact integer combinatorics, there is no sampling:
//!
//! ```
//! # use kibitz_eval::*;
//! let cards = parse_cards("2c 3s 5c 6h Qh").unwrap();
//! assert_eq!(evaluate_hand(&cards).unwrap(), HandRank::HighCard);
//!
//! // A gutshot, the four fours make a straight on the turn.
//! let next = posterior(&cards).unwrap();
//! assert_eq!(next.total(), 47);
//! assert_eq!(next[HandRank::Straight], 4);
//! assert_eq!(next.sum(), next.total());
//!
//! let p = apriori::probability(5, Ranking::Hand(HandRank::HighCard)).unwrap();
//! assert!((p - 0.501177).abs() < 1e-6);
//! ```
//!
//! The [Hand] type bundles all of the above for a set of cards:
//!
//! ```
//! # use kibitz_eval::*;
//! let hand = Hand::parse("9c Tc Jc Qc Kc").unwrap();
//! assert_eq!(hand.ranking(), Ranking::Hand(HandRank::StraightFlush));
//! assert_eq!(hand.posterior()[HandRank::RoyalFlush], 1);
//! println!("{hand}");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod apriori;
mod combin;
pub use combin::binomial;
pub mod draw;
pub use draw::Draw;
mod error;
pub use error::{Error, Result};
pub mod eval;
pub use eval::{HandRank, PocketRank, Ranking, evaluate, evaluate_hand, evaluate_pocket};
mod frequencies;
pub use frequencies::Frequencies;
mod hand;
pub use hand::Hand;
pub mod posterior;
pub use posterior::{Street, posterior};

// Reexport cards types.
pub use kibitz_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
