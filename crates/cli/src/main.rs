// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown analyzer CLI.
//!
//! Reads showdown requests from stdin, one per line, as the whitespace
//! separated signed decimal card byte codes the upstream logger emits, and
//! prints the evaluated table for each line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::io::{self, BufRead};

use showdown_eval::Showdown;

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of seats for the multi seat layout, heads-up when omitted.
    #[clap(long, short, value_parser = clap::value_parser!(u8).range(2..=9))]
    seats: Option<u8>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        // A bad line is reported and does not stop the stream.
        match analyze(&line, cli.seats) {
            Ok(output) => print!("{output}"),
            Err(e) => error!("{e:#}"),
        }
    }

    Ok(())
}

fn analyze(line: &str, seats: Option<u8>) -> Result<String> {
    let codes = report::parse_codes(line)?;
    let showdown = match seats {
        Some(seats) => Showdown::from_codes(&codes, seats as usize)?,
        None => Showdown::heads_up(&codes)?,
    };

    Ok(report::render(&showdown))
}
