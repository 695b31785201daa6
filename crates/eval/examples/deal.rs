// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals a random table and prints the showdown.
//
// ```bash
// $ cargo r --example deal -- --seats 4
// ```
use clap::Parser;

use showdown_eval::{Card, Deck, Showdown};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of seats at the table.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=9))]
    seats: u8,
}

fn main() {
    let cli = Cli::parse();

    let mut deck = Deck::new_and_shuffled(&mut rand::rng());
    let board = std::array::from_fn(|_| deck.deal());
    let holes = (0..cli.seats)
        .map(|_| [deck.deal(), deck.deal()])
        .collect::<Vec<_>>();

    let showdown = Showdown::new(board, &holes).expect("deck cards are unique");

    println!("board: {}", row(showdown.board()));
    for (i, seat) in showdown.seats().iter().enumerate() {
        println!(
            "[{i}] {} -> {} = {}",
            row(seat.hole()),
            seat.hand().category(),
            row(seat.hand().best_five()),
        );
    }
    println!("winners: {:?}", showdown.winners());
}

fn row(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
