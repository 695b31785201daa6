// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp, fmt};
use thiserror::Error;

/// A Poker card.
///
/// A card is represented by its one byte wire code with the following format:
///
/// ```text
///   +---------+
///   |ssssffff |
///   +---------+
///   s = suit of card (diamonds=0x1, clubs=0x2, hearts=0x3, spades=0x4)
///   f = face value of card (deuce=2, trey=3, ..., ten=10, jack=11,
///       queen=12, king=13, ace=14)
/// ```
///
/// Any other nibble combination is not a card, [Card::from_code] rejects it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Creates a card given a face and a suit.
    pub fn new(face: Face, suit: Suit) -> Card {
        Self(suit as u8 | face as u8)
    }

    /// Decodes a card from its byte code.
    ///
    /// Fails if the suit nibble or the face value are not valid.
    pub fn from_code(code: u8) -> Result<Card, InvalidCard> {
        let valid_suit = matches!(code & 0xF0, 0x10 | 0x20 | 0x30 | 0x40);
        let valid_face = (2..=14).contains(&(code & 0x0F));
        if valid_suit && valid_face {
            Ok(Self(code))
        } else {
            Err(InvalidCard(code))
        }
    }

    /// This card byte code.
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0xF0 {
            0x10 => Suit::Diamonds,
            0x20 => Suit::Clubs,
            0x30 => Suit::Hearts,
            0x40 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:02x}", self.0),
        }
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        match self.0 & 0x0F {
            0x2 => Face::Deuce,
            0x3 => Face::Trey,
            0x4 => Face::Four,
            0x5 => Face::Five,
            0x6 => Face::Six,
            0x7 => Face::Seven,
            0x8 => Face::Eight,
            0x9 => Face::Nine,
            0xA => Face::Ten,
            0xB => Face::Jack,
            0xC => Face::Queen,
            0xD => Face::King,
            0xE => Face::Ace,
            _ => panic!("Invalid face value 0x{:02x}", self.0),
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        (self.face(), self.suit()).cmp(&(other.face(), other.suit()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face(), self.suit())
    }
}

/// Sorts cards by descending face, equal faces by descending suit.
///
/// The suit order is arbitrary but fixed, it only makes the sort output
/// deterministic and never affects hand ranking.
pub fn sort_descending(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.cmp(a));
}

/// Error for a byte code that does not encode a valid card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card code {0}")]
pub struct InvalidCard(pub u8);

/// Card face value, the Ace is the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Deuce
    Deuce = 2,
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

impl Face {
    /// Returns all faces from the Deuce up.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Single character symbol for compact display, the Ten is `T`.
    pub fn symbol(&self) -> char {
        match self {
            Face::Deuce => '2',
            Face::Trey => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 'T',
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
            Face::Ace => 'A',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Ten => write!(f, "10"),
            face => write!(f, "{}", face.symbol()),
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 0x10,
    /// Clubs suit.
    Clubs = 0x20,
    /// Hearts suit.
    Hearts = 0x30,
    /// Spades suit.
    Spades = 0x40,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck.
#[derive(Debug)]
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
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |f| Card::new(f, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut codes = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal();
            assert_eq!(card.code() & 0x0F, card.face() as u8);
            assert_eq!(card.code() & 0xF0, card.suit() as u8);
            assert_eq!(Card::from_code(card.code()), Ok(card));
            codes.insert(card.code());
        }

        // Check uniqueness.
        assert_eq!(codes.len(), Deck::SIZE);

        let ks = Card::new(Face::King, Suit::Spades);
        assert_eq!(ks.code(), 0x4D);

        let td = Card::new(Face::Ten, Suit::Diamonds);
        assert_eq!(td.code(), 0x1A);

        let dh = Card::new(Face::Deuce, Suit::Hearts);
        assert_eq!(dh.code(), 0x32);
    }

    #[test]
    fn from_code_rejects_invalid_codes() {
        // Bad suit nibble.
        for code in [0x02u8, 0x0E, 0x52, 0x6E, 0xF2] {
            assert_eq!(Card::from_code(code), Err(InvalidCard(code)));
        }

        // Bad face value.
        for code in [0x10u8, 0x21, 0x30, 0x41, 0x1F, 0x4F] {
            assert_eq!(Card::from_code(code), Err(InvalidCard(code)));
        }

        assert_eq!(InvalidCard(0x51).to_string(), "invalid card code 81");
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Face::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Face::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Face::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");
        assert_eq!(c.face().symbol(), 'T');

        let c = Card::new(Face::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "A♣");
    }

    #[test]
    fn descending_sort() {
        let mut cards = vec![
            Card::new(Face::Five, Suit::Spades),
            Card::new(Face::Ace, Suit::Diamonds),
            Card::new(Face::Five, Suit::Hearts),
            Card::new(Face::King, Suit::Clubs),
            Card::new(Face::Ace, Suit::Spades),
        ];

        sort_descending(&mut cards);

        let sorted = cards.iter().map(Card::to_string).collect::<Vec<_>>();
        assert_eq!(sorted, ["A♠", "A♦", "K♣", "5♠", "5♥"]);
    }
}
