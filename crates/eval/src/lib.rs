// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Hand evaluator for 5, 6 and 7 cards Texas Hold'em hands. The evaluator
//! classifies a hand into one of the ten Poker categories, extracts the five
//! best cards, and totally orders evaluated hands for showdowns, including
//! exact tie detection.
//!
//! To evaluate a player hand pass the community and hole cards to [evaluate]:
//!
//! ```
//! # use showdown_eval::*;
//! let community = [
//!     Card::new(Face::Nine, Suit::Diamonds),
//!     Card::new(Face::Nine, Suit::Clubs),
//!     Card::new(Face::King, Suit::Hearts),
//!     Card::new(Face::Ace, Suit::Spades),
//!     Card::new(Face::Deuce, Suit::Diamonds),
//! ];
//! let hole = [
//!     Card::new(Face::Nine, Suit::Hearts),
//!     Card::new(Face::King, Suit::Clubs),
//! ];
//!
//! let hand = evaluate(&community, &hole).unwrap();
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//! ```
//!
//! and use [Showdown] to rank any number of seats against the same board:
//!
//! ```
//! # use showdown_eval::*;
//! // Two seats dealt round-robin followed by the board cards.
//! let codes = [0x4B, 0x32, 0x4D, 0x23, 0x16, 0x27, 0x38, 0x49, 0x1A];
//! let showdown = Showdown::from_codes(&codes, 2).unwrap();
//! assert_eq!(showdown.winners(), vec![0]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BOARD_SIZE, EvalError, EvaluatedHand, HOLE_SIZE, HandCategory, compare_hands, evaluate};

pub mod showdown;
pub use showdown::{Seat, Showdown};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Face, InvalidCard, Suit};
