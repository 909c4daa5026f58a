// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies exactly 5 cards with [evaluate], counting cards
//! per rank and per suit, and builds a tiebreak key so that hands of the same
//! category can be compared. [BestHand::select] searches all the 5 cards
//! subsets of a 5 to 7 cards pool and keeps the strongest, it also reports
//! the strongest unmade [Draw](crate::Draw) in the pool.

mod best;
mod hand;

pub use best::BestHand;
pub use hand::{EvaluatedHand, HandCategory, evaluate};
