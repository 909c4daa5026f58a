// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand selection.
use serde::Serialize;

use handcoach_cards::Card;

use super::hand::{EvaluatedHand, evaluate};
use crate::draw::Draw;

/// Maximum number of cards in a pool, two hole cards and five board cards.
const MAX_POOL: usize = 7;

/// The size of a hand.
const HAND_SIZE: usize = 5;

/// The best hand in a pool of cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestHand {
    /// The strongest 5 cards hand.
    pub hand: EvaluatedHand,
    /// The strongest unmade draw in the pool.
    pub draw: Option<Draw>,
}

impl BestHand {
    /// Selects the best hand from 2 to 7 cards.
    ///
    /// With fewer than 5 cards there is nothing to search and the result is a
    /// high card evaluation of the available cards. Among equal hands the
    /// first found is kept.
    ///
    /// Panics if there are more than 7 cards.
    pub fn select(cards: &[Card]) -> Self {
        assert!(cards.len() <= MAX_POOL, "at most {MAX_POOL} cards");

        let hand = if cards.len() < HAND_SIZE {
            EvaluatedHand::high_card(cards)
        } else {
            let mut best: Option<EvaluatedHand> = None;
            let mut hand = [cards[0]; HAND_SIZE];
            for_each_ksubset(cards.len(), |subset| {
                for (c, &idx) in hand.iter_mut().zip(subset) {
                    *c = cards[idx];
                }

                let value = evaluate(&hand);
                if best.is_none_or(|b| value > b) {
                    best = Some(value);
                }
            });

            best.unwrap_or_else(|| EvaluatedHand::high_card(&cards[..HAND_SIZE]))
        };

        let draw = Draw::find(cards, hand.category());
        Self { hand, draw }
    }
}

/// Calls the given closure for each 5-subset of the indices 0..n.
fn for_each_ksubset<F>(n: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    // Algorithm L from TAOCP 4a
    const K: usize = HAND_SIZE;
    let mut c = [0usize; K + 3];
    for (j, slot) in c.iter_mut().enumerate().take(K + 1).skip(1) {
        *slot = j - 1;
    }

    c[K + 1] = n;

    if n < K {
        return;
    }

    loop {
        f(&c[1..=K]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > K {
            break;
        }

        c[j] += 1;
    }
}
