// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Analysis configuration.
use serde::{Deserialize, Serialize};

/// Analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the opponent archetype fold equity (0.0 to 1.0).
    pub fold_equity: Option<f64>,
    /// Raise size as a fraction of the pot when there is no bet to call.
    pub raise_pot_fraction: f64,
    /// A bet to call of at least this fraction of the pot is a large bet.
    pub large_bet_fraction: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fold_equity: None,
            raise_pot_fraction: 0.75,
            large_bet_fraction: 0.5,
        }
    }
}
