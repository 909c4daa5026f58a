// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Analysis errors.
use thiserror::Error;

use handcoach_eval::{Card, ParseCardError};

/// Errors returned when a decision cannot be analyzed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A malformed card identifier.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    /// Fewer than two hole cards.
    #[error("need 2 hole cards, got {0}")]
    InsufficientCards(usize),
    /// More than two hole cards.
    #[error("need 2 hole cards, got {0}")]
    TooManyHoleCards(usize),
    /// The board doesn't have 0, 3, 4 or 5 cards.
    #[error("invalid board with {0} cards, expected 0, 3, 4 or 5")]
    InvalidBoard(usize),
    /// The same card appears twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// Zero pot, bet and call amounts in a price comparison.
    #[error("zero pot, bet and call amounts")]
    DegenerateInput,
    /// Unknown action label.
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    /// Unknown opponent archetype label.
    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),
}
