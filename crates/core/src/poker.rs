// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used to describe a decision point.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use handcoach_eval::Card;

use crate::error::AnalysisError;

/// A player action.
///
/// The declaration order is the order used to break ties between actions
/// with the same expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass when there is no bet to call.
    Check,
    /// Match the outstanding bet.
    Call,
    /// Bet or raise.
    Raise,
}

impl Action {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call => "Call",
            Action::Raise => "Raise",
        }
    }

    /// Maps check and call to the one that is legal given the amount to call.
    pub fn normalize(self, amount_to_call: f64) -> Action {
        match self {
            Action::Call if amount_to_call <= 0.0 => Action::Check,
            action => action,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Action {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(Action::Fold),
            "check" => Ok(Action::Check),
            "call" => Ok(Action::Call),
            "raise" | "bet" => Ok(Action::Raise),
            _ => Err(AnalysisError::UnknownAction(s.to_string())),
        }
    }
}

/// An opponent range table.
#[derive(Debug)]
pub struct Range {
    /// Approximate share of all starting hands, in percent.
    pub share: f64,
    /// The hand classes in the range.
    pub hands: &'static [&'static str],
}

static NIT_RANGE: Range = Range {
    share: 8.0,
    hands: &["77+", "AJs+", "KQs", "AQo+"],
};

static DEFAULT_RANGE: Range = Range {
    share: 20.0,
    hands: &[
        "22+", "A8s+", "KTs+", "QTs+", "JTs", "T9s", "98s", "ATo+", "KJo+", "QJo",
    ],
};

static LAG_RANGE: Range = Range {
    share: 35.0,
    hands: &[
        "22+", "A2s+", "K8s+", "Q9s+", "J9s+", "T8s+", "97s+", "86s+", "75s+", "65s", "54s",
        "A8o+", "KTo+", "QTo+", "JTo",
    ],
};

static CALLING_STATION_RANGE: Range = Range {
    share: 55.0,
    hands: &[
        "22+", "A2s+", "K2s+", "Q5s+", "J7s+", "T7s+", "96s+", "85s+", "74s+", "64s+", "53s+",
        "43s", "A2o+", "K8o+", "Q9o+", "J9o+", "T9o", "98o",
    ],
};

/// The share of hands an opponent folds to a raise.
const FOLD_EQUITY: f64 = 0.30;

/// Opponent behavioral profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Tight passive player.
    Nit,
    /// Regular player.
    #[default]
    Default,
    /// Loose aggressive player.
    #[serde(rename = "LAG")]
    Lag,
    /// Loose passive player that rarely folds.
    #[serde(rename = "Calling Station")]
    CallingStation,
}

impl Archetype {
    /// The archetype label.
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Nit => "Nit",
            Archetype::Default => "Default",
            Archetype::Lag => "LAG",
            Archetype::CallingStation => "Calling Station",
        }
    }

    /// The archetype range table.
    pub fn range(&self) -> &'static Range {
        match self {
            Archetype::Nit => &NIT_RANGE,
            Archetype::Default => &DEFAULT_RANGE,
            Archetype::Lag => &LAG_RANGE,
            Archetype::CallingStation => &CALLING_STATION_RANGE,
        }
    }

    /// The probability this opponent folds to a raise, this is the same for
    /// all archetypes.
    pub fn fold_equity(&self) -> f64 {
        FOLD_EQUITY
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Archetype {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match name.as_str() {
            "nit" => Ok(Archetype::Nit),
            "default" => Ok(Archetype::Default),
            "lag" => Ok(Archetype::Lag),
            "callingstation" | "station" => Ok(Archetype::CallingStation),
            _ => Err(AnalysisError::UnknownArchetype(s.to_string())),
        }
    }
}

/// The betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    /// No board cards.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// Gets the street from the number of board cards.
    pub fn from_board(board: &[Card]) -> Result<Street, AnalysisError> {
        match board.len() {
            0 => Ok(Street::Preflop),
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            n => Err(AnalysisError::InvalidBoard(n)),
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{street}")
    }
}

/// A decision point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionInput {
    /// The pot before the outstanding bet.
    pub pot_size: f64,
    /// The hero effective stack.
    #[serde(default)]
    pub effective_stack: f64,
    /// The amount the hero must put in to call.
    pub amount_to_call: f64,
    /// The size of the opponent bet.
    pub bet_size: f64,
    /// Number of opponents in the hand.
    pub num_opponents: u8,
    /// The opponent profile.
    #[serde(default)]
    pub archetype: Archetype,
    /// The hero hole cards.
    pub hero: Vec<Card>,
    /// The board cards.
    #[serde(default)]
    pub board: Vec<Card>,
}

impl DecisionInput {
    /// Creates an input with one opponent, no pot and no bet from the hole
    /// and board card identifiers.
    pub fn from_ids<S: AsRef<str>>(hero: &[S], board: &[S]) -> Result<Self, AnalysisError> {
        Ok(Self {
            num_opponents: 1,
            hero: Card::parse_many(hero)?,
            board: Card::parse_many(board)?,
            ..Default::default()
        })
    }
}

/// A money amount formatted with a dollar sign, two decimals and thousands
/// separators.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(pub f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < -0.005 { "-" } else { "" };
        let cents = (self.0.abs() * 100.0).round() as u64;
        let (units, cents) = (cents / 100, cents % 100);

        if units >= 1_000_000 {
            write!(
                f,
                "{sign}${},{:03},{:03}.{cents:02}",
                units / 1_000_000,
                units % 1_000_000 / 1_000,
                units % 1000
            )
        } else if units >= 1_000 {
            write!(f, "{sign}${},{:03}.{cents:02}", units / 1000, units % 1000)
        } else {
            write!(f, "{sign}${units}.{cents:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_formatting() {
        assert_eq!(Amount(0.0).to_string(), "$0.00");
        assert_eq!(Amount(-0.001).to_string(), "$0.00");
        assert_eq!(Amount(12.5).to_string(), "$12.50");
        assert_eq!(Amount(-3.0).to_string(), "-$3.00");
        assert_eq!(Amount(1_234.567).to_string(), "$1,234.57");
        assert_eq!(Amount(1_234_567.0).to_string(), "$1,234,567.00");
    }

    #[test]
    fn action_parse() {
        assert_eq!("FOLD".parse::<Action>(), Ok(Action::Fold));
        assert_eq!(" call ".parse::<Action>(), Ok(Action::Call));
        assert_eq!("Check".parse::<Action>(), Ok(Action::Check));
        assert_eq!("bet".parse::<Action>(), Ok(Action::Raise));
        assert_eq!(
            "shove".parse::<Action>(),
            Err(AnalysisError::UnknownAction("shove".to_string()))
        );
    }

    #[test]
    fn action_normalize() {
        assert_eq!(Action::Call.normalize(0.0), Action::Check);
        assert_eq!(Action::Call.normalize(10.0), Action::Call);
        assert_eq!(Action::Check.normalize(10.0), Action::Check);
        assert_eq!(Action::Raise.normalize(0.0), Action::Raise);
    }

    #[test]
    fn archetype_parse() {
        assert_eq!("Nit".parse::<Archetype>(), Ok(Archetype::Nit));
        assert_eq!("lag".parse::<Archetype>(), Ok(Archetype::Lag));
        assert_eq!(
            "Calling Station".parse::<Archetype>(),
            Ok(Archetype::CallingStation)
        );
        assert_eq!(
            "calling-station".parse::<Archetype>(),
            Ok(Archetype::CallingStation)
        );
        assert!("maniac".parse::<Archetype>().is_err());

        for a in [
            Archetype::Nit,
            Archetype::Default,
            Archetype::Lag,
            Archetype::CallingStation,
        ] {
            assert_eq!(a.label().parse::<Archetype>(), Ok(a));
            assert_eq!(a.fold_equity(), 0.30);
            assert!(!a.range().hands.is_empty());
        }
    }

    #[test]
    fn archetype_serde() {
        let json = serde_json::to_string(&Archetype::CallingStation).unwrap();
        assert_eq!(json, "\"Calling Station\"");
        let a: Archetype = serde_json::from_str("\"LAG\"").unwrap();
        assert_eq!(a, Archetype::Lag);
    }

    #[test]
    fn street_from_board() {
        let cards = Card::parse_many(&["AH", "KH", "QH", "JH", "0H", "9H"]).unwrap();
        assert_eq!(Street::from_board(&cards[..0]), Ok(Street::Preflop));
        assert_eq!(Street::from_board(&cards[..3]), Ok(Street::Flop));
        assert_eq!(Street::from_board(&cards[..4]), Ok(Street::Turn));
        assert_eq!(Street::from_board(&cards[..5]), Ok(Street::River));
        assert_eq!(
            Street::from_board(&cards[..2]),
            Err(AnalysisError::InvalidBoard(2))
        );
        assert_eq!(
            Street::from_board(&cards),
            Err(AnalysisError::InvalidBoard(6))
        );
    }

    #[test]
    fn decision_input_from_ids() {
        let input = DecisionInput::from_ids(&["AH", "KH"], &["QH", "7H", "2D"]).unwrap();
        assert_eq!(input.num_opponents, 1);
        assert_eq!(input.archetype, Archetype::Default);
        assert_eq!(input.board.len(), 3);

        assert!(matches!(
            DecisionInput::from_ids(&["AH", "XX"], &[]),
            Err(AnalysisError::Parse(_))
        ));
    }
}
