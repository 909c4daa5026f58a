// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs detection.
//!
//! Outs are the unseen cards that would complete a flush, complete a straight
//! or pair a rank already held. The unseen cards are the 52 cards deck minus
//! the hero and board cards.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use handcoach_cards::{Card, Deck};

use crate::ranks;

/// Number of board cards on the river.
const RIVER_CARDS: usize = 5;

/// Outs grouped by the reason they improve the hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsCategories {
    /// Cards completing a four cards flush.
    pub flush: Vec<Card>,
    /// Cards completing a four cards straight.
    pub straight: Vec<Card>,
    /// Cards pairing, tripling or quadding a held rank.
    pub rank_improvement: Vec<Card>,
}

/// The outs for a hand.
///
/// The `cards` list is the deduplicated union of the categories, so a card
/// that both completes a flush and pairs a rank is counted once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsReport {
    /// Number of distinct outs.
    pub total: usize,
    /// The distinct outs sorted by identifier.
    pub cards: Vec<Card>,
    /// Outs by category.
    pub categories: OutsCategories,
}

impl OutsReport {
    /// Finds the outs for the hero cards given the board.
    ///
    /// Preflop and on the river there are no outs and the report is empty.
    pub fn find(hero: &[Card], board: &[Card]) -> OutsReport {
        if board.is_empty() || board.len() >= RIVER_CARDS {
            return OutsReport::default();
        }

        let visible = hero.iter().chain(board).copied().collect::<Vec<_>>();
        let available = Deck::without(&visible);

        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for c in &visible {
            rank_counts[c.rank_bits() as usize] += 1;
            suit_counts[c.suit_bits() as usize] += 1;
        }

        let flush = sorted_cards(
            available
                .iter()
                .filter(|c| suit_counts[c.suit_bits() as usize] == 4),
        );

        let mask = ranks::rank_mask(&visible);
        let mut missing = AHashSet::new();
        for low in ranks::windows_desc() {
            let window = ranks::window(low, 5);
            let present = mask & window;
            if present.count_ones() == 4 {
                let hole = (window & !present).trailing_zeros() as u8;
                missing.insert(ranks::card_value(hole));
            }
        }

        let straight = sorted_cards(available.iter().filter(|c| missing.contains(&c.rank_bits())));

        // Pairing outs only count for hands without a flush or straight draw.
        let rank_improvement = if flush.is_empty() && straight.is_empty() {
            sorted_cards(
                available
                    .iter()
                    .filter(|c| (1..=3).contains(&rank_counts[c.rank_bits() as usize])),
            )
        } else {
            Vec::new()
        };

        let cards = sorted_cards(
            flush
                .iter()
                .chain(&straight)
                .chain(&rank_improvement)
                .copied(),
        );

        OutsReport {
            total: cards.len(),
            cards,
            categories: OutsCategories {
                flush,
                straight,
                rank_improvement,
            },
        }
    }
}

/// Deduplicates and sorts cards by their identifier.
fn sorted_cards(cards: impl Iterator<Item = Card>) -> Vec<Card> {
    let mut cards = cards
        .collect::<AHashSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    cards.sort_by_cached_key(|c| c.to_string());
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn find(hero: &[&str], board: &[&str]) -> OutsReport {
        OutsReport::find(
            &Card::parse_many(hero).unwrap(),
            &Card::parse_many(board).unwrap(),
        )
    }

    fn ids(cards: &[Card]) -> Vec<String> {
        cards.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn flush_draw_outs() {
        let outs = find(&["AH", "KH"], &["QH", "7H", "2D"]);
        assert_eq!(
            ids(&outs.categories.flush),
            ["0H", "2H", "3H", "4H", "5H", "6H", "8H", "9H", "JH"]
        );

        assert!(outs.categories.straight.is_empty());
        assert!(outs.categories.rank_improvement.is_empty());
        assert_eq!(outs.total, 9);
        assert_eq!(outs.cards, outs.categories.flush);
    }

    #[test]
    fn flush_only_outs() {
        let outs = find(&["AH", "KH"], &["QH", "7H"]);
        assert_eq!(outs.categories.flush.len(), 9);
        assert!(outs.categories.straight.is_empty());
    }

    #[test]
    fn straight_outs() {
        // Open ended, 8 outs.
        let outs = find(&["8C", "9D"], &["0H", "JS", "2D"]);
        assert_eq!(
            ids(&outs.categories.straight),
            ["7C", "7D", "7H", "7S", "QC", "QD", "QH", "QS"]
        );
        assert!(outs.categories.flush.is_empty());

        // Gutshot, 4 outs.
        let outs = find(&["8C", "9D"], &["JH", "QS", "2D"]);
        assert_eq!(ids(&outs.categories.straight), ["0C", "0D", "0H", "0S"]);

        // Wheel draw needs a five.
        let outs = find(&["AC", "2D"], &["3H", "4S", "9D"]);
        assert_eq!(ids(&outs.categories.straight), ["5C", "5D", "5H", "5S"]);
    }

    #[test]
    fn combined_draw_outs() {
        // Flush and open ended draw, the 7H and QH count once.
        let outs = find(&["8H", "9H"], &["0H", "JS", "2H"]);
        assert_eq!(outs.categories.flush.len(), 9);
        assert_eq!(outs.categories.straight.len(), 8);
        assert_eq!(outs.total, 15);
    }

    #[test]
    fn rank_improvement_outs() {
        // Overcards on a dry board, pairing any of the five ranks.
        let outs = find(&["AH", "KD"], &["8C", "4S", "2D"]);
        assert_eq!(outs.categories.rank_improvement.len(), 15);
        assert_eq!(outs.total, 15);

        let outs = find(&["7C", "7D"], &["7H", "KS", "2D"]);
        assert_eq!(
            ids(&outs.categories.rank_improvement),
            ["2C", "2H", "2S", "7S", "KC", "KD", "KH"]
        );
    }

    #[test]
    fn no_outs_preflop_or_river() {
        assert_eq!(find(&["AH", "KH"], &[]), OutsReport::default());
        assert_eq!(
            find(&["AH", "KH"], &["QH", "7H", "2D", "3C", "9S"]),
            OutsReport::default()
        );
    }

    #[test]
    fn outs_are_unseen() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new_and_shuffled(&mut rng);

        for _ in 0..200 {
            if deck.count() < 6 {
                deck = Deck::new_and_shuffled(&mut rng);
            }

            let n_board = [3, 4].choose(&mut rng).copied().unwrap();
            let hero = (0..2).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let board = (0..n_board).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let outs = OutsReport::find(&hero, &board);

            assert_eq!(outs.total, outs.cards.len());
            assert!(outs.cards.iter().all(|c| !hero.contains(c) && !board.contains(c)));

            let categories = outs
                .categories
                .flush
                .iter()
                .chain(&outs.categories.straight)
                .chain(&outs.categories.rank_improvement)
                .collect::<AHashSet<_>>();
            assert_eq!(categories.len(), outs.total);
        }
    }
}
