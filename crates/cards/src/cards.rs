// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing a malformed card identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The identifier is not two characters long.
    #[error("invalid card '{0}': expected two characters")]
    Length(String),
    /// Unrecognized rank symbol.
    #[error("invalid card '{0}': unknown rank '{1}'")]
    Rank(String, char),
    /// Unrecognized suit symbol.
    #[error("invalid card '{0}': unknown suit '{1}'")]
    Suit(String, char),
}

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |rrrrrrss|
///   +--------+
///   r = rank value (deuce=2,trey=3,...,king=13,ace=14)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// Cards order by rank first and suit second.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_value(self.rank_bits()).unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }

    /// Returns the rank bits, this is the rank value 2..=14.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        self.0 >> 2
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        self.0 & 0x3
    }

    /// Checks if two cards have the same suit.
    pub fn same_suit(&self, other: &Card) -> bool {
        self.suit_bits() == other.suit_bits()
    }

    /// Parses a list of card identifiers.
    pub fn parse_many<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Card>, ParseCardError> {
        ids.iter().map(|id| id.as_ref().parse()).collect()
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(s.to_string()));
        };

        let rank = Rank::from_symbol(r).ok_or_else(|| ParseCardError::Rank(s.to_string(), r))?;
        let suit = Suit::from_symbol(su).ok_or_else(|| ParseCardError::Suit(s.to_string(), su))?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank, the discriminant is the rank value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, Ace is 14.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Gets a rank from its value, 1 is accepted as the low Ace.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 | 14 => Some(Rank::Ace),
            2..=13 => Rank::ranks().nth(value as usize - 2),
            _ => None,
        }
    }

    /// Parses a rank symbol, `T` is accepted as an alias for `0`.
    pub fn from_symbol(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            '0' | 'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The symbol used for labels like `AKs` or `T9o`.
    pub fn label(&self) -> char {
        match self {
            Rank::Ten => 'T',
            r => r.symbol(),
        }
    }

    fn symbol(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit symbol.
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with all the cards not in `used`.
    pub fn without(used: &[Card]) -> Self {
        let mut deck = Self::default();
        deck.cards.retain(|c| !used.contains(c));
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterates the deck cards.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.rank_bits(), card.rank().value());
            assert_eq!(card.suit_bits(), card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn card_identifiers() {
        let cases = [
            (Rank::Deuce, Suit::Clubs, "2C"),
            (Rank::Nine, Suit::Diamonds, "9D"),
            (Rank::Ten, Suit::Hearts, "0H"),
            (Rank::Queen, Suit::Spades, "QS"),
            (Rank::Ace, Suit::Hearts, "AH"),
        ];

        for (rank, suit, id) in cases {
            assert_eq!(Card::new(rank, suit).to_string(), id);
        }
    }

    #[test]
    fn card_parse() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert_eq!("ah".parse(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("Ts".parse(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("0s".parse(), Ok(Card::new(Rank::Ten, Suit::Spades)));
    }

    #[test]
    fn card_parse_errors() {
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::Length(String::new()))
        );
        assert_eq!(
            "AHS".parse::<Card>(),
            Err(ParseCardError::Length("AHS".to_string()))
        );
        assert_eq!(
            "1H".parse::<Card>(),
            Err(ParseCardError::Rank("1H".to_string(), '1'))
        );
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::Suit("AX".to_string(), 'X'))
        );
        assert!(Card::parse_many(&["AH", "10H"]).is_err());
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"QC\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Card>("\"ZZ\"").is_err());
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(15), None);
        assert_eq!(Rank::Ten.label(), 'T');
    }

    #[test]
    fn deck_without() {
        let used = Card::parse_many(&["AH", "KH", "QH"]).unwrap();
        let deck = Deck::without(&used);
        assert_eq!(deck.count(), Deck::SIZE - 3);
        assert!(used.iter().all(|c| !deck.contains(*c)));

        let mut deck = Deck::without(&[]);
        assert_eq!(deck.count(), Deck::SIZE);
        let dealt = deck.deal().unwrap();
        assert!(!deck.contains(dealt));
    }
}
