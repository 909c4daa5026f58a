// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcoach hand evaluator.
//!
//! Classifies 5 cards hands, selects the best 5 cards hand out of 2 to 7
//! cards, detects unmade draws and lists the outs that improve a hand.
//!
//! To evaluate a hand use [evaluate] for exactly 5 cards or [BestHand::select]
//! for a hole cards plus board pool:
//!
//! ```
//! # use handcoach_eval::*;
//! let cards = Card::parse_many(&["AH", "KH", "QH", "7H", "2D"]).unwrap();
//! let best = BestHand::select(&cards);
//! assert_eq!(best.hand.category(), HandCategory::HighCard);
//! assert_eq!(best.draw, Some(Draw::Flush));
//!
//! let wheel = Card::parse_many(&["AH", "2C", "3D", "4S", "5H"]).unwrap();
//! let six = Card::parse_many(&["2H", "3C", "4D", "5S", "6H"]).unwrap();
//! assert!(evaluate(&six) > evaluate(&wheel));
//! ```
//!
//! and [OutsReport::find] to list the cards that would improve it:
//!
//! ```
//! # use handcoach_eval::*;
//! let hero = Card::parse_many(&["AH", "KH"]).unwrap();
//! let board = Card::parse_many(&["QH", "7H", "2D"]).unwrap();
//! let outs = OutsReport::find(&hero, &board);
//! assert_eq!(outs.categories.flush.len(), 9);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod draw;
pub mod eval;
pub mod outs;
mod ranks;

pub use draw::Draw;
pub use eval::{BestHand, EvaluatedHand, HandCategory, evaluate};
pub use outs::{OutsCategories, OutsReport};

// Reexport cards types.
pub use handcoach_cards::{Card, Deck, ParseCardError, Rank, Suit};
