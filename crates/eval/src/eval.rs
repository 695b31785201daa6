// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification and comparison.
//!
//! The classifier works on the combined community and hole cards sorted by
//! descending face. It groups cards by suit and by face count, then walks a
//! fixed elimination ladder from the strongest category down: straight
//! flush, flush, four of a kind, full house, straight, three of a kind, two
//! pair, one pair, high card. The first matching category wins and its five
//! best cards are extracted with the category defining cards first and the
//! highest remaining kickers after them.
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use showdown_cards::{Card, Face, InvalidCard, Suit, sort_descending};

/// The number of community cards on a full board.
pub const BOARD_SIZE: usize = 5;

/// The number of hole cards per seat.
pub const HOLE_SIZE: usize = 2;

/// The lowest face a straight can end on, the wheel A-5-4-3-2 is the only
/// straight where the Ace plays below it.
const MIN_FACE: Face = Face::Deuce;

/// An evaluation error, always a caller error, never a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card byte code failed to decode.
    #[error(transparent)]
    InvalidCard(#[from] InvalidCard),
    /// The same card appears twice in one evaluation input.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Wrong number of cards for the requested mode.
    #[error("expected {expected} cards, got {actual}")]
    InsufficientCards {
        /// The number of cards the operation needs.
        expected: usize,
        /// The number of cards supplied by the caller.
        actual: usize,
    },
}

/// Poker hand categories ordered from the weakest to the strongest.
///
/// The enum order is the primary showdown comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category, the five highest cards play.
    HighCard = 1,
    /// Two cards of one face.
    OnePair,
    /// Two cards of one face and two of another.
    TwoPair,
    /// Three cards of one face.
    ThreeOfAKind,
    /// Five consecutive faces.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one face and two of another.
    FullHouse,
    /// Four cards of one face.
    FourOfAKind,
    /// Five consecutive faces of one suit.
    StraightFlush,
    /// The Ace high straight flush.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// A classified hand with its five best cards.
///
/// The five cards hold the category defining cards first and the kickers
/// after them in descending face order, the order the comparator walks when
/// breaking category ties. In the wheel straight the Ace is last because it
/// plays low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    best_five: [Card; BOARD_SIZE],
}

impl EvaluatedHand {
    /// Evaluates the best five cards hand out of 5 to 7 distinct cards.
    pub fn eval(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
        if !(BOARD_SIZE..=BOARD_SIZE + HOLE_SIZE).contains(&cards.len()) {
            return Err(EvalError::InsufficientCards {
                expected: if cards.len() < BOARD_SIZE {
                    BOARD_SIZE
                } else {
                    BOARD_SIZE + HOLE_SIZE
                },
                actual: cards.len(),
            });
        }

        let mut seen = AHashSet::with_capacity(cards.len());
        for &card in cards {
            if !seen.insert(card.code()) {
                return Err(EvalError::DuplicateCard(card));
            }
        }

        Ok(Self::classify(cards.to_vec()))
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five best cards, category defining cards first then kickers.
    pub fn best_five(&self) -> &[Card; BOARD_SIZE] {
        &self.best_five
    }

    fn classify(mut cards: Vec<Card>) -> EvaluatedHand {
        sort_descending(&mut cards);

        let mut suits: AHashMap<Suit, Vec<Card>> = AHashMap::new();
        let mut counts: AHashMap<Face, u8> = AHashMap::new();
        let mut pairs = Vec::new();
        let mut trips = Vec::new();
        let mut quads = Vec::new();

        // Faces are recorded the first time they reach each count, so over
        // the descending sort every list starts at its highest face.
        for &card in &cards {
            suits.entry(card.suit()).or_default().push(card);
            let count = counts.entry(card.face()).or_insert(0);
            *count += 1;
            match *count {
                2 => pairs.push(card.face()),
                3 => trips.push(card.face()),
                4 => quads.push(card.face()),
                _ => {}
            }
        }

        // With at most seven cards only one suit can reach five, and a
        // straight flush in it beats every other category.
        for suited in suits.values() {
            if suited.len() >= BOARD_SIZE {
                if let Some(run) = suited_straight(suited) {
                    let category = if run[0].face() == Face::Ace {
                        HandCategory::RoyalFlush
                    } else {
                        HandCategory::StraightFlush
                    };
                    return EvaluatedHand {
                        category,
                        best_five: run,
                    };
                }
                return EvaluatedHand {
                    category: HandCategory::Flush,
                    best_five: take_five(suited),
                };
            }
        }

        if let Some(&quad) = quads.first() {
            EvaluatedHand {
                category: HandCategory::FourOfAKind,
                best_five: best_with_faces(&cards, quad, None),
            }
        } else if !trips.is_empty() && pairs.len() > 1 {
            // A face with three of a kind is also in the pair list, a full
            // house needs a pair on a different face, possibly a second
            // trips contributing its two best cards.
            let three = trips[0];
            let pair = if pairs[0] == three { pairs[1] } else { pairs[0] };
            EvaluatedHand {
                category: HandCategory::FullHouse,
                best_five: best_with_faces(&cards, three, Some(pair)),
            }
        } else if let Some(run) = straight(&cards) {
            EvaluatedHand {
                category: HandCategory::Straight,
                best_five: run,
            }
        } else if let Some(&three) = trips.first() {
            EvaluatedHand {
                category: HandCategory::ThreeOfAKind,
                best_five: best_with_faces(&cards, three, None),
            }
        } else if pairs.len() > 1 {
            EvaluatedHand {
                category: HandCategory::TwoPair,
                best_five: best_with_faces(&cards, pairs[0], Some(pairs[1])),
            }
        } else if let Some(&pair) = pairs.first() {
            EvaluatedHand {
                category: HandCategory::OnePair,
                best_five: best_with_faces(&cards, pair, None),
            }
        } else {
            EvaluatedHand {
                category: HandCategory::HighCard,
                best_five: take_five(&cards),
            }
        }
    }

    fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.best_five.iter().map(Card::face)
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.faces().cmp(other.faces()))
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality is rank equality: same category and same five faces in order,
/// suits never matter.
impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

/// Evaluates the fixed Hold'em case, five community cards plus two hole
/// cards.
pub fn evaluate(community: &[Card], hole: &[Card]) -> Result<EvaluatedHand, EvalError> {
    if community.len() != BOARD_SIZE {
        return Err(EvalError::InsufficientCards {
            expected: BOARD_SIZE,
            actual: community.len(),
        });
    }

    if hole.len() != HOLE_SIZE {
        return Err(EvalError::InsufficientCards {
            expected: HOLE_SIZE,
            actual: hole.len(),
        });
    }

    let mut cards = Vec::with_capacity(BOARD_SIZE + HOLE_SIZE);
    cards.extend_from_slice(community);
    cards.extend_from_slice(hole);
    EvaluatedHand::eval(&cards)
}

/// Compares two evaluated hands for a showdown.
///
/// Higher category wins, equal categories compare the five best faces
/// position by position, five equal faces are an exact tie.
pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.cmp(b)
}

fn take_five(cards: &[Card]) -> [Card; BOARD_SIZE] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

/// Extracts the five best cards for the face count categories: the cards
/// matching `first` lead, then the cards matching `second`, then the highest
/// remaining kickers, everything already in descending order.
fn best_with_faces(sorted: &[Card], first: Face, second: Option<Face>) -> [Card; BOARD_SIZE] {
    let mut best = Vec::with_capacity(sorted.len());
    let mut seconds = Vec::with_capacity(4);
    let mut rest = Vec::with_capacity(sorted.len());

    for &card in sorted {
        if card.face() == first {
            best.push(card);
        } else if second == Some(card.face()) {
            seconds.push(card);
        } else {
            rest.push(card);
        }
    }

    best.extend(seconds);
    best.extend(rest);
    take_five(&best)
}

/// Finds the best run of five consecutive faces in cards sorted by
/// descending face, duplicate faces allowed.
fn straight(sorted: &[Card]) -> Option<[Card; BOARD_SIZE]> {
    let n = sorted.len();
    let mut run = vec![sorted[0]];

    for (i, &card) in sorted.iter().enumerate().skip(1) {
        let last = run[run.len() - 1];
        if last.face() as u8 - card.face() as u8 == 1 {
            run.push(card);
            if run.len() == 4 && card.face() == MIN_FACE && sorted[0].face() == Face::Ace {
                // The wheel, the top Ace plays low after the Five to Deuce
                // run.
                run.push(sorted[0]);
                return Some(take_five(&run));
            } else if run.len() == BOARD_SIZE {
                return Some(take_five(&run));
            }
        } else if run.len() + (n - i - 1) < 4 {
            // Not enough cards left to reach five, the wheel only needs
            // four plus the Ace already seen on top.
            return None;
        } else if last.face() != card.face() {
            run.clear();
            run.push(card);
        }
    }

    None
}

/// Finds the best run of five consecutive faces within one suit, the caller
/// guarantees at least five suited cards sorted by descending face.
fn suited_straight(suited: &[Card]) -> Option<[Card; BOARD_SIZE]> {
    // One suit has no duplicate faces, a window is a run iff its ends are
    // four faces apart.
    for window in suited.windows(BOARD_SIZE) {
        if window[0].face() as u8 - window[4].face() as u8 == 4 {
            return Some(take_five(window));
        }
    }

    let n = suited.len();
    if suited[0].face() == Face::Ace
        && suited[n - 1].face() == MIN_FACE
        && suited[n - 4].face() as u8 == MIN_FACE as u8 + 3
    {
        return Some([
            suited[n - 4],
            suited[n - 3],
            suited[n - 2],
            suited[n - 1],
            suited[0],
        ]);
    }

    None
}
