// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Face, Suit};
//! let ah = Card::new(Face::Ace, Suit::Hearts);
//! let kd = Card::new(Face::King, Suit::Diamonds);
//! ```
//!
//! to decode cards from their one byte wire code, where the high nibble
//! selects the suit and the low nibble the face value:
//!
//! ```
//! # use showdown_cards::{Card, Face, Suit};
//! let card = Card::from_code(0x4E).unwrap();
//! assert_eq!(card, Card::new(Face::Ace, Suit::Spades));
//! assert!(Card::from_code(0x51).is_err());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::{Card, Deck};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal();
//! assert_eq!(Card::from_code(card.code()), Ok(card));
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Face, InvalidCard, Suit, sort_descending};
