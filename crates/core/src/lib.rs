// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcoach decision analysis.
//!
//! Given the hero hole cards, the board and the betting context this crate
//! estimates the hero equity, computes the expected value of folding,
//! checking or calling, and raising, and reviews a player action against the
//! best one:
//!
//! ```
//! # use handcoach_core::*;
//! let input = DecisionInput {
//!     pot_size: 20.0,
//!     bet_size: 20.0,
//!     amount_to_call: 20.0,
//!     ..DecisionInput::from_ids(&["AH", "KH"], &["QH", "7H", "2D"]).unwrap()
//! };
//!
//! let analyzer = Analyzer::default();
//! let report = analyzer.analyze(&input).unwrap();
//! assert_eq!(report.outs.total, 9);
//! assert_eq!(report.ev.hero_equity, 35.0);
//! assert_eq!(report.ev.optimal_action, Action::Call);
//!
//! let review = analyzer.review(&input, "fold".parse().unwrap()).unwrap();
//! assert!(!review.verdict.ev.unwrap().correct);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod analysis;
pub mod config;
pub mod equity;
pub mod error;
pub mod ev;
pub mod judge;
pub mod poker;

pub use analysis::{Analyzer, DecisionReport, Review};
pub use config::Config;
pub use error::AnalysisError;
pub use ev::{ActionEv, EvResult};
pub use judge::{Judgment, Verdict};
pub use poker::{Action, Archetype, DecisionInput, Street};

// Reexport evaluation types.
pub use handcoach_eval::{
    BestHand, Card, Deck, Draw, EvaluatedHand, HandCategory, OutsReport, Rank, Suit,
};
