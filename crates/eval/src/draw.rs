// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Unmade draws detection.
use serde::Serialize;
use std::fmt;

use handcoach_cards::Card;

use crate::{HandCategory, ranks};

/// An unmade draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Draw {
    /// Four cards of the same suit.
    #[serde(rename = "Flush Draw")]
    Flush,
    /// Four consecutive ranks open at both ends.
    #[serde(rename = "Open-Ended Straight Draw")]
    OpenEnded,
    /// Four ranks of a straight missing an inside or end rank.
    #[serde(rename = "Gutshot Straight Draw")]
    Gutshot,
}

impl Draw {
    /// Finds the strongest draw in a pool of cards given the made hand
    /// category, a flush draw takes precedence over straight draws.
    ///
    /// Draws to a category the made hand already reaches are not reported.
    pub fn find(cards: &[Card], made: HandCategory) -> Option<Draw> {
        if made < HandCategory::Flush {
            let mut suit_counts = [0u8; 4];
            for c in cards {
                suit_counts[c.suit_bits() as usize] += 1;
            }

            if suit_counts.iter().any(|&n| n >= 4) {
                return Some(Draw::Flush);
            }
        }

        if made >= HandCategory::Straight {
            return None;
        }

        let mask = ranks::rank_mask(cards);

        // Open ended needs a rank on each side, A-2-3-4 and J-Q-K-A are
        // one way draws.
        let open_ended = (2..=10).any(|low| mask & ranks::window(low, 4) == ranks::window(low, 4));
        if open_ended {
            return Some(Draw::OpenEnded);
        }

        let gutshot = ranks::windows_desc()
            .any(|low| (mask & ranks::window(low, 5)).count_ones() == 4);
        gutshot.then_some(Draw::Gutshot)
    }

    /// The draw display label.
    pub fn label(&self) -> &'static str {
        match self {
            Draw::Flush => "Flush Draw",
            Draw::OpenEnded => "Open-Ended Straight Draw",
            Draw::Gutshot => "Gutshot Straight Draw",
        }
    }

    /// Checks if this is a straight draw.
    pub fn is_straight(&self) -> bool {
        matches!(self, Draw::OpenEnded | Draw::Gutshot)
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
