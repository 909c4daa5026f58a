// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcoach cards types.
//!
//! This crate defines the card types used by the analysis engine. Cards are
//! created from a rank and a suit:
//!
//! ```
//! # use handcoach_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(ah.rank().value(), 14);
//! ```
//!
//! or parsed from their two characters identifier, a rank symbol (`2`-`9`,
//! `0` for Ten, `J`, `Q`, `K`, `A`) followed by a suit symbol (`C`, `D`, `H`,
//! `S`):
//!
//! ```
//! # use handcoach_cards::{Card, Rank, Suit};
//! let th: Card = "0h".parse().unwrap();
//! assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
//! assert!("1H".parse::<Card>().is_err());
//! ```
//!
//! The [Deck] type is the 52 cards universe, visible cards can be removed to
//! get the pool of unseen cards:
//!
//! ```
//! # use handcoach_cards::{Card, Deck};
//! let hero = Card::parse_many(&["AH", "KH"]).unwrap();
//! let deck = Deck::without(&hero);
//! assert_eq!(deck.count(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, ParseCardError, Rank, Suit};
