// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank bitmasks for straights detection.
use handcoach_cards::Card;

/// Lowest value of a 5 ranks window, 1 is the low Ace.
pub const MIN_WINDOW_LOW: u8 = 1;

/// Highest value of a 5 ranks window (T-J-Q-K-A).
pub const MAX_WINDOW_LOW: u8 = 10;

/// Builds a mask with bit `v` set for each rank value `v` in the cards, an
/// Ace sets both bit 14 and bit 1.
pub fn rank_mask(cards: &[Card]) -> u16 {
    cards.iter().fold(0u16, |mask, c| {
        let v = c.rank_bits();
        let mask = mask | (1 << v);
        if v == 14 { mask | (1 << 1) } else { mask }
    })
}

/// The mask for `len` consecutive rank values starting from `low`.
#[inline]
pub fn window(low: u8, len: u8) -> u16 {
    ((1u16 << len) - 1) << low
}

/// Iterates the 5 ranks windows low values from the highest (T-J-Q-K-A)
/// down to the wheel (A-2-3-4-5).
pub fn windows_desc() -> impl Iterator<Item = u8> {
    (MIN_WINDOW_LOW..=MAX_WINDOW_LOW).rev()
}

/// Returns the high card value of the best straight in the mask.
pub fn straight_high(mask: u16) -> Option<u8> {
    windows_desc()
        .find(|&low| mask & window(low, 5) == window(low, 5))
        .map(|low| low + 4)
}

/// Maps a window value to a card rank value, the low Ace becomes 14.
#[inline]
pub fn card_value(v: u8) -> u8 {
    if v == 1 { 14 } else { v }
}
