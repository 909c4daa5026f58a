// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcoach command line decision analysis.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{error, info};

use handcoach_core::{Action, Analyzer, Archetype, Card, Config, DecisionInput, Deck};

mod report;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DealStreet {
    Preflop,
    Flop,
    Turn,
    River,
}

impl DealStreet {
    fn board_cards(self) -> usize {
        match self {
            DealStreet::Preflop => 0,
            DealStreet::Flop => 3,
            DealStreet::Turn => 4,
            DealStreet::River => 5,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(about = "Poker decision analysis")]
struct Cli {
    /// The hero hole cards, like `AH,KH` (0 or T for tens).
    #[clap(long, value_delimiter = ',', num_args = 1.., required_unless_present = "deal")]
    hero: Vec<String>,
    /// The board cards, like `QH,7H,2D`.
    #[clap(long, value_delimiter = ',', num_args = 1..)]
    board: Vec<String>,
    /// Deal random hero and board cards for a street.
    #[clap(long, value_enum, conflicts_with_all = ["hero", "board"])]
    deal: Option<DealStreet>,
    /// The pot before the outstanding bet.
    #[clap(long, default_value_t = 0.0)]
    pot: f64,
    /// The opponent bet.
    #[clap(long, default_value_t = 0.0)]
    bet: f64,
    /// The amount to call, defaults to the bet.
    #[clap(long)]
    to_call: Option<f64>,
    /// The hero effective stack.
    #[clap(long, default_value_t = 0.0)]
    stack: f64,
    /// Number of opponents.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=9))]
    opponents: u8,
    /// The opponent profile: nit, default, lag or calling-station.
    #[clap(long, default_value = "default")]
    archetype: Archetype,
    /// Review this action: fold, check, call or raise.
    #[clap(long)]
    action: Option<Action>,
    /// Override the opponent fold equity (0.0 to 1.0).
    #[clap(long)]
    fold_equity: Option<f64>,
    /// Raise size as a fraction of the pot when there is no bet.
    #[clap(long, default_value_t = 0.75)]
    raise_fraction: f64,
    /// A call of at least this fraction of the pot is a large bet.
    #[clap(long, default_value_t = 0.5)]
    large_bet: f64,
    /// Print the analysis as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(fe) = cli.fold_equity {
        if !(0.0..=1.0).contains(&fe) {
            bail!("fold equity {fe} must be between 0 and 1");
        }
    }

    let config = Config {
        fold_equity: cli.fold_equity,
        raise_pot_fraction: cli.raise_fraction,
        large_bet_fraction: cli.large_bet,
    };

    let (hero, board) = match cli.deal {
        Some(street) => deal(street),
        None => (Card::parse_many(&cli.hero)?, Card::parse_many(&cli.board)?),
    };

    if cli.deal.is_some() {
        info!("Dealt {} | {}", report::cards_list(&hero), report::cards_list(&board));
    }

    let input = DecisionInput {
        pot_size: cli.pot,
        effective_stack: cli.stack,
        amount_to_call: cli.to_call.unwrap_or(cli.bet),
        bet_size: cli.bet,
        num_opponents: cli.opponents,
        archetype: cli.archetype,
        hero,
        board,
    };

    let analyzer = Analyzer::new(config);
    let output = match cli.action {
        Some(action) => {
            let review = analyzer.review(&input, action)?;
            if cli.json {
                serde_json::to_string_pretty(&review)?
            } else {
                report::render_review(&input, &review)
            }
        }
        None => {
            let report = analyzer.analyze(&input)?;
            if cli.json {
                serde_json::to_string_pretty(&report)?
            } else {
                report::render_report(&input, &report)
            }
        }
    };

    println!("{output}");
    Ok(())
}

/// Deals hero and board cards from a shuffled deck.
fn deal(street: DealStreet) -> (Vec<Card>, Vec<Card>) {
    let mut deck = Deck::new_and_shuffled(&mut rand::rng());
    let hero = (0..2).filter_map(|_| deck.deal()).collect();
    let board = (0..street.board_cards())
        .filter_map(|_| deck.deal())
        .collect();
    (hero, board)
}
