// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::{cmp::Ordering, fmt};

use handcoach_cards::{Card, Rank, Suit};

use crate::ranks;

/// The hand category, ordered from the weakest to the strongest.
///
/// [HandCategory::FourOfAKind] and [HandCategory::StraightFlush] take part in
/// the ordering but the evaluator never returns them: four of a kind is
/// reported as three of a kind and a straight flush as a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    /// No pair.
    #[serde(rename = "High Card")]
    HighCard,
    /// One pair.
    #[serde(rename = "Pair")]
    Pair,
    /// Two pairs.
    #[serde(rename = "Two Pair")]
    TwoPair,
    /// Three cards of the same rank.
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    /// Five consecutive ranks.
    #[serde(rename = "Straight")]
    Straight,
    /// Five cards of the same suit.
    #[serde(rename = "Flush")]
    Flush,
    /// Three of a kind and a pair.
    #[serde(rename = "Full House")]
    FullHouse,
    /// Four cards of the same rank.
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    /// Straight and flush.
    #[serde(rename = "Straight Flush")]
    StraightFlush,
}

impl HandCategory {
    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An evaluated hand.
///
/// Hands compare by category first and then by their tiebreak key, the
/// source cards do not take part in comparisons so two hands with the same
/// category and key are tied.
#[derive(Clone, Copy)]
pub struct EvaluatedHand {
    category: HandCategory,
    key: [u8; 5],
    cards: [Card; 5],
    len: u8,
}

impl EvaluatedHand {
    /// A high card evaluation over fewer than 5 cards, the key is padded
    /// with zeros.
    ///
    /// Panics if there are more than 5 cards.
    pub fn high_card(cards: &[Card]) -> Self {
        assert!(cards.len() <= 5, "at most 5 cards");

        let mut sorted = [FILLER; 5];
        sorted[..cards.len()].copy_from_slice(cards);
        sorted[..cards.len()].sort_unstable_by(|a, b| b.cmp(a));

        let mut key = [0; 5];
        for (k, c) in key.iter_mut().zip(&sorted[..cards.len()]) {
            *k = c.rank_bits();
        }

        Self {
            category: HandCategory::HighCard,
            key,
            cards: sorted,
            len: cards.len() as u8,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tiebreak key, rank values in descending significance.
    pub fn key(&self) -> [u8; 5] {
        self.key
    }

    /// The cards that make this hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len as usize]
    }
}

const FILLER: Card = Card::new(Rank::Deuce, Suit::Clubs);

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl fmt::Debug for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?} {:?}", self.category, self.key, self.cards())
    }
}

impl Serialize for EvaluatedHand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("EvaluatedHand", 3)?;
        s.serialize_field("category", &self.category)?;
        s.serialize_field("key", &self.key)?;
        s.serialize_field("cards", self.cards())?;
        s.end()
    }
}

/// Evaluates a 5 cards hand.
///
/// Panics if the hand doesn't have 5 cards.
pub fn evaluate(cards: &[Card]) -> EvaluatedHand {
    assert_eq!(cards.len(), 5, "a hand must have 5 cards");

    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for c in cards {
        rank_counts[c.rank_bits() as usize] += 1;
        suit_counts[c.suit_bits() as usize] += 1;
    }

    // Rank groups as (count, rank) ordered by count and then rank.
    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for (rank, &count) in rank_counts.iter().enumerate().rev() {
        if count > 0 {
            groups[num_groups] = (count, rank as u8);
            num_groups += 1;
        }
    }

    let groups = &mut groups[..num_groups];
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = suit_counts.iter().any(|&n| n == 5);
    let straight = ranks::straight_high(ranks::rank_mask(cards));
    let top = groups[0].0;
    let second = groups.get(1).map(|g| g.0).unwrap_or(0);

    let category = if top >= 3 && second >= 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if straight.is_some() {
        HandCategory::Straight
    } else if top >= 3 {
        HandCategory::ThreeOfAKind
    } else if top == 2 && second == 2 {
        HandCategory::TwoPair
    } else if top == 2 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    };

    let mut key = [0u8; 5];
    match straight {
        Some(high) if category == HandCategory::Straight => {
            for (i, k) in key.iter_mut().enumerate() {
                *k = high - i as u8;
            }
        }
        _ => {
            let flat = groups
                .iter()
                .flat_map(|&(count, rank)| std::iter::repeat_n(rank, count as usize));
            for (k, rank) in key.iter_mut().zip(flat) {
                *k = rank;
            }
        }
    }

    let mut sorted = [FILLER; 5];
    sorted.copy_from_slice(cards);
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    EvaluatedHand {
        category,
        key,
        cards: sorted,
        len: 5,
    }
}
