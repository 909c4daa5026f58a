// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heuristic equity estimation.
//!
//! Preflop equity comes from a table keyed on the hole cards shape, after the
//! flop it is derived from the number of outs using the rule of 4 on the flop
//! and the rule of 2 on the turn. River equity is a flat 5%.
use handcoach_eval::Card;

use crate::poker::Street;

/// Flop equity bounds.
const FLOP_BOUNDS: (f64, f64) = (12.0, 95.0);

/// Turn equity bounds.
const TURN_BOUNDS: (f64, f64) = (9.0, 95.0);

/// River equity, there are no cards to come.
const RIVER_EQUITY: f64 = 5.0;

/// Estimates the hero equity in percent.
pub fn estimate(street: Street, c1: Card, c2: Card, outs: usize) -> f64 {
    match street {
        Street::Preflop => preflop(c1, c2),
        Street::Flop => flop(outs),
        Street::Turn => turn(outs),
        Street::River => RIVER_EQUITY,
    }
}

/// Preflop equity in percent for two hole cards.
pub fn preflop(c1: Card, c2: Card) -> f64 {
    let (hi, lo) = if c1.rank_bits() >= c2.rank_bits() {
        (c1.rank_bits(), c2.rank_bits())
    } else {
        (c2.rank_bits(), c1.rank_bits())
    };

    let suited = c1.same_suit(&c2);
    let gap = hi - lo;
    let pick = |s: f64, o: f64| if suited { s } else { o };

    if gap == 0 {
        return match hi {
            13.. => 74.0,
            10.. => 68.0,
            7.. => 63.0,
            _ => 58.0,
        };
    }

    if suited && gap <= 1 && hi >= 11 {
        58.0
    } else if lo >= 10 && hi == 14 {
        pick(56.0, 52.0)
    } else if hi >= 13 && lo >= 9 {
        pick(54.0, 49.0)
    } else if suited && gap <= 2 {
        51.0
    } else if hi == 14 {
        50.0
    } else if gap == 1 {
        47.0
    } else if hi >= 12 && lo >= 8 {
        45.0
    } else {
        41.0
    }
}

/// Flop equity in percent, the rule of 4 discounted past 8 outs.
pub fn flop(outs: usize) -> f64 {
    if outs == 0 {
        return FLOP_BOUNDS.0;
    }

    let outs = outs as f64;
    let equity = if outs > 8.0 {
        outs * 4.0 - (outs - 8.0)
    } else {
        outs * 4.0
    };

    equity.clamp(FLOP_BOUNDS.0, FLOP_BOUNDS.1)
}

/// Turn equity in percent, the rule of 2.
pub fn turn(outs: usize) -> f64 {
    if outs == 0 {
        return TURN_BOUNDS.0;
    }

    (outs as f64 * 2.0).clamp(TURN_BOUNDS.0, TURN_BOUNDS.1)
}

/// A hole cards class label like `AA`, `AKs` or `T9o`.
pub fn hand_class(c1: Card, c2: Card) -> String {
    let (hi, lo) = if c1.rank() >= c2.rank() {
        (c1, c2)
    } else {
        (c2, c1)
    };

    let (h, l) = (hi.rank().label(), lo.rank().label());
    if hi.rank() == lo.rank() {
        format!("{h}{l}")
    } else if hi.same_suit(&lo) {
        format!("{h}{l}s")
    } else {
        format!("{h}{l}o")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre(c1: &str, c2: &str) -> f64 {
        preflop(c1.parse().unwrap(), c2.parse().unwrap())
    }

    #[test]
    fn preflop_pairs() {
        assert_eq!(pre("AH", "AD"), 74.0);
        assert_eq!(pre("KH", "KD"), 74.0);
        assert_eq!(pre("QH", "QD"), 68.0);
        assert_eq!(pre("0H", "0D"), 68.0);
        assert_eq!(pre("9H", "9D"), 63.0);
        assert_eq!(pre("7H", "7D"), 63.0);
        assert_eq!(pre("6H", "6D"), 58.0);
        assert_eq!(pre("2H", "2D"), 58.0);
    }

    #[test]
    fn preflop_unpaired() {
        // Suited broadway connectors.
        assert_eq!(pre("AH", "KH"), 58.0);
        assert_eq!(pre("JH", "0H"), 58.0);

        // Big aces.
        assert_eq!(pre("AH", "QH"), 56.0);
        assert_eq!(pre("AH", "KD"), 52.0);
        assert_eq!(pre("0D", "AC"), 52.0);

        // Big kings.
        assert_eq!(pre("KH", "9H"), 54.0);
        assert_eq!(pre("KH", "0D"), 49.0);

        // Suited gappers.
        assert_eq!(pre("8H", "6H"), 51.0);
        assert_eq!(pre("5S", "4S"), 51.0);

        // Any ace.
        assert_eq!(pre("AH", "2D"), 50.0);
        assert_eq!(pre("AH", "5H"), 50.0);

        // Offsuit connectors.
        assert_eq!(pre("8H", "7D"), 47.0);

        // Queen or better with an eight or better.
        assert_eq!(pre("QH", "8D"), 45.0);

        assert_eq!(pre("7H", "2D"), 41.0);
        assert_eq!(pre("JH", "4D"), 41.0);
    }

    #[test]
    fn preflop_in_range() {
        let deck = handcoach_eval::Deck::default().into_iter().collect::<Vec<_>>();
        for (i, &c1) in deck.iter().enumerate() {
            for &c2 in &deck[i + 1..] {
                let equity = preflop(c1, c2);
                assert!((41.0..=74.0).contains(&equity));
                assert_eq!(equity, preflop(c2, c1));
            }
        }
    }

    #[test]
    fn postflop() {
        assert_eq!(flop(0), 12.0);
        assert_eq!(flop(2), 12.0);
        assert_eq!(flop(4), 16.0);
        assert_eq!(flop(8), 32.0);
        assert_eq!(flop(9), 35.0);
        assert_eq!(flop(15), 53.0);
        assert_eq!(flop(40), 95.0);

        assert_eq!(turn(0), 9.0);
        assert_eq!(turn(4), 9.0);
        assert_eq!(turn(9), 18.0);
        assert_eq!(turn(60), 95.0);
    }

    #[test]
    fn estimate_by_street() {
        let (c1, c2) = ("AH".parse().unwrap(), "KH".parse().unwrap());
        assert_eq!(estimate(Street::Preflop, c1, c2, 0), 58.0);
        assert_eq!(estimate(Street::Flop, c1, c2, 9), 35.0);
        assert_eq!(estimate(Street::Turn, c1, c2, 9), 18.0);
        assert_eq!(estimate(Street::River, c1, c2, 9), 5.0);
    }

    #[test]
    fn hand_classes() {
        let class = |a: &str, b: &str| hand_class(a.parse().unwrap(), b.parse().unwrap());
        assert_eq!(class("AH", "AD"), "AA");
        assert_eq!(class("KH", "AH"), "AKs");
        assert_eq!(class("9D", "0C"), "T9o");
    }
}
