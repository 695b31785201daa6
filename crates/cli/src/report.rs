// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Request line parsing and showdown reports.
use anyhow::{Context, Result};
use std::fmt::Write;

use showdown_eval::{Card, Face, Showdown};

/// Parses a whitespace separated list of signed decimal card byte values.
pub fn parse_codes(line: &str) -> Result<Vec<u8>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i8>()
                .map(|value| value as u8)
                .with_context(|| format!("invalid card byte {token:?}"))
        })
        .collect()
}

/// Renders an evaluated table, one line for the board, one per seat, and a
/// final line with the winning seats.
pub fn render(showdown: &Showdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "board: {}", row(showdown.board()));

    for (i, seat) in showdown.seats().iter().enumerate() {
        let _ = write!(
            out,
            "[{i}] {} -> {} = {}",
            row(seat.hole()),
            seat.hand().category(),
            row(seat.hand().best_five()),
        );

        match seat.pocket_pair() {
            Some(Face::Ace) => out.push_str(" (pocket aces)"),
            Some(Face::Deuce) => out.push_str(" (pocket deuces)"),
            Some(_) => out.push_str(" (pocket pair)"),
            None => {}
        }

        out.push('\n');
    }

    let winners = showdown.winners();
    if let [winner] = winners[..] {
        let _ = writeln!(out, "winner: seat {winner}");
    } else {
        let seats = winners
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "winners: seats {seats} (tie)");
    }

    out
}

fn row(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_signed_decimal_codes() {
        let codes = parse_codes("58 59  60\t61 18").unwrap();
        assert_eq!(codes, [0x3A, 0x3B, 0x3C, 0x3D, 0x12]);

        assert!(parse_codes("58 xyz 60").is_err());
        assert!(parse_codes("58 300 60").is_err());
    }

    #[test]
    fn render_heads_up_report() {
        // Board 10♥ J♥ Q♥ K♥ 2♦, left seat A♥ 3♣, right seat A♠ 4♦.
        let codes = parse_codes("58 59 60 61 18 62 78 35 20").unwrap();
        let showdown = Showdown::heads_up(&codes).unwrap();

        let report = render(&showdown);
        assert_eq!(
            report,
            "board: 10♥ J♥ Q♥ K♥ 2♦\n\
             [0] A♥ 3♣ -> Royal Flush = A♥ K♥ Q♥ J♥ 10♥\n\
             [1] A♠ 4♦ -> Straight = A♠ K♥ Q♥ J♥ 10♥\n\
             winner: seat 0\n"
        );
    }

    #[test]
    fn render_reports_ties_and_pockets() {
        // The straight flush 9 to 5 is on the board, pocket aces against
        // pocket deuces, both seats play the board.
        let codes = parse_codes("41 40 39 38 37 62 18 78 34").unwrap();
        let showdown = Showdown::heads_up(&codes).unwrap();

        let report = render(&showdown);
        assert_eq!(
            report,
            "board: 9♣ 8♣ 7♣ 6♣ 5♣\n\
             [0] A♥ A♠ -> Straight Flush = 9♣ 8♣ 7♣ 6♣ 5♣ (pocket aces)\n\
             [1] 2♦ 2♣ -> Straight Flush = 9♣ 8♣ 7♣ 6♣ 5♣ (pocket deuces)\n\
             winners: seats 0, 1 (tie)\n"
        );
    }
}
