// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multi seat showdown evaluation and the byte code table layouts.
//!
//! A showdown request arrives as a flat sequence of card byte codes plus a
//! seat count, both scoped to the single request. Two layouts are supported:
//! the multi seat layout with the hole cards dealt round robin before the
//! board, and the two player layout with the board first and the hole cards
//! dealt alternately to the left and right seat.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::eval::{BOARD_SIZE, EvalError, EvaluatedHand, HOLE_SIZE, evaluate};
use showdown_cards::{Card, Face};

/// One evaluated player position at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    hole: [Card; HOLE_SIZE],
    hand: EvaluatedHand,
}

impl Seat {
    /// This seat hole cards.
    pub fn hole(&self) -> &[Card; HOLE_SIZE] {
        &self.hole
    }

    /// This seat best hand against the board.
    pub fn hand(&self) -> &EvaluatedHand {
        &self.hand
    }

    /// The paired face when the hole cards form a pocket pair.
    ///
    /// Display only annotation, it never affects ranking.
    pub fn pocket_pair(&self) -> Option<Face> {
        (self.hole[0].face() == self.hole[1].face()).then_some(self.hole[0].face())
    }
}

/// A fully evaluated table at showdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showdown {
    board: [Card; BOARD_SIZE],
    seats: Vec<Seat>,
}

impl Showdown {
    /// Evaluates every seat against the board.
    ///
    /// Fails with [EvalError::DuplicateCard] when a card appears twice
    /// across the board and the holes, and with
    /// [EvalError::InsufficientCards] when there are no seats.
    pub fn new(board: [Card; BOARD_SIZE], holes: &[[Card; HOLE_SIZE]]) -> Result<Self, EvalError> {
        if holes.is_empty() {
            return Err(EvalError::InsufficientCards {
                expected: BOARD_SIZE + HOLE_SIZE,
                actual: BOARD_SIZE,
            });
        }

        let mut seen = AHashSet::with_capacity(BOARD_SIZE + holes.len() * HOLE_SIZE);
        for &card in board.iter().chain(holes.iter().flatten()) {
            if !seen.insert(card.code()) {
                return Err(EvalError::DuplicateCard(card));
            }
        }

        let seats = holes
            .iter()
            .map(|&hole| {
                let hand = evaluate(&board, &hole)?;
                Ok(Seat { hole, hand })
            })
            .collect::<Result<Vec<_>, EvalError>>()?;

        Ok(Self { board, seats })
    }

    /// Decodes a multi seat request: `2 * seats` hole card codes dealt
    /// round robin, seat `i` receives codes `i` and `i + seats`, followed
    /// by the five board codes.
    pub fn from_codes(codes: &[u8], seats: usize) -> Result<Self, EvalError> {
        let expected = seats * HOLE_SIZE + BOARD_SIZE;
        if codes.len() != expected {
            return Err(EvalError::InsufficientCards {
                expected,
                actual: codes.len(),
            });
        }

        let cards = decode(codes)?;
        let holes = (0..seats)
            .map(|i| [cards[i], cards[i + seats]])
            .collect::<Vec<_>>();
        Self::new(board(&cards[seats * HOLE_SIZE..]), &holes)
    }

    /// Decodes the two player request: the five board codes followed by the
    /// four hole codes dealt alternately to the left and right seat.
    pub fn heads_up(codes: &[u8]) -> Result<Self, EvalError> {
        const EXPECTED: usize = BOARD_SIZE + 2 * HOLE_SIZE;
        if codes.len() != EXPECTED {
            return Err(EvalError::InsufficientCards {
                expected: EXPECTED,
                actual: codes.len(),
            });
        }

        let cards = decode(codes)?;
        let holes = [[cards[5], cards[7]], [cards[6], cards[8]]];
        Self::new(board(&cards), &holes)
    }

    /// The board cards.
    pub fn board(&self) -> &[Card; BOARD_SIZE] {
        &self.board
    }

    /// The evaluated seats in request order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Indices of the seats holding the best hand, more than one on an
    /// exact tie.
    pub fn winners(&self) -> Vec<usize> {
        let Some(best) = self.seats.iter().map(Seat::hand).max() else {
            return Vec::new();
        };

        self.seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.hand.cmp(best) == Ordering::Equal)
            .map(|(i, _)| i)
            .collect()
    }
}

fn decode(codes: &[u8]) -> Result<Vec<Card>, EvalError> {
    codes
        .iter()
        .map(|&code| Card::from_code(code).map_err(EvalError::from))
        .collect()
}

fn board(cards: &[Card]) -> [Card; BOARD_SIZE] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HandCategory;
    use showdown_cards::{InvalidCard, Suit};

    #[test]
    fn multi_seat_codes_deal_round_robin() {
        // Three seats: A♠ A♥ | K♠ Q♠ | 7♦ 2♣ then the board 9♦ 9♣ K♥ 5♠ 2♦.
        let codes = [
            0x4E, 0x4D, 0x17, 0x3E, 0x4C, 0x22, 0x19, 0x29, 0x3D, 0x45, 0x12,
        ];

        let showdown = Showdown::from_codes(&codes, 3).unwrap();

        let holes = showdown
            .seats()
            .iter()
            .map(|s| s.hole().map(|c| c.to_string()).join(" "))
            .collect::<Vec<_>>();
        assert_eq!(holes, ["A♠ A♥", "K♠ Q♠", "7♦ 2♣"]);

        let board = showdown.board().map(|c| c.to_string()).join(" ");
        assert_eq!(board, "9♦ 9♣ K♥ 5♠ 2♦");

        // Aces up beat kings up and nines up.
        let categories = showdown
            .seats()
            .iter()
            .map(|s| s.hand().category())
            .collect::<Vec<_>>();
        assert_eq!(
            categories,
            [
                HandCategory::TwoPair,
                HandCategory::TwoPair,
                HandCategory::TwoPair
            ]
        );
        assert_eq!(showdown.winners(), vec![0]);
    }

    #[test]
    fn heads_up_codes_split_board_and_holes() {
        // Board 10♥ J♥ Q♥ K♥ 2♦, left seat A♥ 3♣, right seat A♠ 4♦.
        let codes = [0x3A, 0x3B, 0x3C, 0x3D, 0x12, 0x3E, 0x4E, 0x23, 0x14];

        let showdown = Showdown::heads_up(&codes).unwrap();

        let left = &showdown.seats()[0];
        assert_eq!(left.hole().map(|c| c.to_string()).join(" "), "A♥ 3♣");
        assert_eq!(left.hand().category(), HandCategory::RoyalFlush);

        let right = &showdown.seats()[1];
        assert_eq!(right.hole().map(|c| c.to_string()).join(" "), "A♠ 4♦");
        assert_eq!(right.hand().category(), HandCategory::Straight);

        assert_eq!(showdown.winners(), vec![0]);
    }

    #[test]
    fn board_playing_for_both_seats_is_a_tie() {
        // The royal flush is on the board, both seats play it.
        let codes = [0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x22, 0x14, 0x23, 0x15];

        let showdown = Showdown::heads_up(&codes).unwrap();
        assert_eq!(showdown.winners(), vec![0, 1]);

        let left = showdown.seats()[0].hand();
        let right = showdown.seats()[1].hand();
        assert_eq!(left, right);
        assert_eq!(left.category(), HandCategory::RoyalFlush);
    }

    #[test]
    fn pocket_pair_annotations() {
        use {Face::*, Suit::*};

        let board = [
            Card::new(Nine, Diamonds),
            Card::new(Nine, Clubs),
            Card::new(King, Hearts),
            Card::new(Five, Spades),
            Card::new(Deuce, Diamonds),
        ];
        let holes = [
            [Card::new(Ace, Spades), Card::new(Ace, Hearts)],
            [Card::new(Deuce, Clubs), Card::new(Deuce, Spades)],
            [Card::new(King, Spades), Card::new(Queen, Spades)],
        ];

        let showdown = Showdown::new(board, &holes).unwrap();
        let seats = showdown.seats();
        assert_eq!(seats[0].pocket_pair(), Some(Face::Ace));
        assert_eq!(seats[1].pocket_pair(), Some(Face::Deuce));
        assert_eq!(seats[2].pocket_pair(), None);
    }

    #[test]
    fn code_count_is_checked() {
        let codes = [0x3A, 0x3B, 0x3C, 0x3D, 0x12, 0x3E, 0x4E, 0x23];
        assert_eq!(
            Showdown::heads_up(&codes),
            Err(EvalError::InsufficientCards {
                expected: 9,
                actual: 8
            })
        );

        assert_eq!(
            Showdown::from_codes(&codes, 3),
            Err(EvalError::InsufficientCards {
                expected: 11,
                actual: 8
            })
        );
    }

    #[test]
    fn invalid_and_duplicate_codes_are_reported() {
        // 0x51 is not a card, face nibble 1 is below the Deuce.
        let codes = [0x3A, 0x3B, 0x3C, 0x3D, 0x51, 0x3E, 0x4E, 0x23, 0x14];
        assert_eq!(
            Showdown::heads_up(&codes),
            Err(EvalError::InvalidCard(InvalidCard(0x51)))
        );

        // The right seat holds the A♥ already on the board.
        let codes = [0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x22, 0x3E, 0x23, 0x15];
        let ah = Card::new(Face::Ace, Suit::Hearts);
        assert_eq!(
            Showdown::heads_up(&codes),
            Err(EvalError::DuplicateCard(ah))
        );
    }
}
