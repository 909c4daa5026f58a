// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Expected value of the hero actions.
//!
//! A call wins the whole pot with the hero equity, a check realizes the
//! equity of the current pot and a raise only wins when the opponent folds.
use log::debug;
use serde::Serialize;
use std::{collections::BTreeMap, fmt, fmt::Write};

use crate::{
    error::AnalysisError,
    poker::{Action, Amount},
};

/// The inputs of the expected value computation.
#[derive(Debug, Clone, Copy)]
pub struct EvInput {
    /// The pot before the outstanding bet.
    pub pot: f64,
    /// The opponent bet.
    pub bet_size: f64,
    /// The amount the hero must put in to call.
    pub amount_to_call: f64,
    /// The hero equity in percent.
    pub equity: f64,
    /// The probability the opponent folds to a raise (0.0 to 1.0).
    pub fold_equity: f64,
    /// Raise size as a fraction of the pot when there is no bet to call.
    pub raise_pot_fraction: f64,
}

/// The unit of a formula component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// A percentage.
    Percent,
    /// A money amount.
    Amount,
}

/// A labelled operand or result of an expected value formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaComponent {
    /// The component label.
    pub label: &'static str,
    /// The component value, percentages are in the 0-100 range.
    pub value: f64,
    /// The value unit.
    pub unit: Unit,
}

impl FormulaComponent {
    fn percent(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value,
            unit: Unit::Percent,
        }
    }

    fn amount(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value,
            unit: Unit::Amount,
        }
    }
}

impl fmt::Display for FormulaComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Percent => write!(f, "{}: {:.1}%", self.label, self.value),
            Unit::Amount => write!(f, "{}: {}", self.label, Amount(self.value)),
        }
    }
}

/// The expected value of an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionEv {
    /// The action.
    pub action: Action,
    /// The action expected value.
    pub ev: f64,
    /// The formula with its operands, ready to display.
    pub formula: String,
    /// The formula operands and result.
    pub components: Vec<FormulaComponent>,
}

/// The expected value of each legal action and the best action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvResult {
    /// The legal actions expected values, a Check entry when there is
    /// nothing to call and a Call entry otherwise.
    pub per_action: BTreeMap<Action, ActionEv>,
    /// The action with the highest expected value.
    pub optimal_action: Action,
    /// The pot odds equity needed to call, in percent.
    pub required_equity: f64,
    /// The hero equity, in percent.
    pub hero_equity: f64,
    /// The opponent fold probability, in percent.
    pub fold_equity: f64,
    /// The raise size used for the raise expected value.
    pub raise_size: f64,
    /// The future winnings needed to make a call break even.
    pub implied_odds_needed: f64,
}

/// Returns the equity in percent needed to call.
///
/// With no pot, bet or call amount there is no price to compare and the
/// function returns [AnalysisError::DegenerateInput].
pub fn required_equity(pot: f64, bet_size: f64, amount_to_call: f64) -> Result<f64, AnalysisError> {
    let total = pot + bet_size + amount_to_call;
    if total <= 0.0 {
        return Err(AnalysisError::DegenerateInput);
    }

    if amount_to_call <= 0.0 {
        Ok(0.0)
    } else {
        Ok(amount_to_call / total * 100.0)
    }
}

impl EvResult {
    /// Computes the expected value of each legal action.
    ///
    /// Ties are broken in favor of the first action in the order fold,
    /// check or call, raise.
    pub fn compute(input: &EvInput) -> EvResult {
        let EvInput {
            pot,
            bet_size: bet,
            amount_to_call: call,
            ..
        } = *input;

        let win = input.equity / 100.0;
        let fe = input.fold_equity;
        let total_if_called = pot + bet + call;

        let required_equity = required_equity(pot, bet, call).unwrap_or_else(|e| {
            debug!("{e}, using zero required equity");
            0.0
        });

        let mut per_action = BTreeMap::new();

        per_action.insert(
            Action::Fold,
            ActionEv {
                action: Action::Fold,
                ev: 0.0,
                formula: format!("EV(Fold) = {}", Amount(0.0)),
                components: vec![FormulaComponent::amount("EV", 0.0)],
            },
        );

        if call > 0.0 {
            let ev = win * total_if_called - (1.0 - win) * call;
            per_action.insert(
                Action::Call,
                ActionEv {
                    action: Action::Call,
                    ev,
                    formula: format!(
                        "EV(Call) = {:.1}% × ({} + {} + {}) - {:.1}% × {} = {}",
                        win * 100.0,
                        Amount(pot),
                        Amount(bet),
                        Amount(call),
                        (1.0 - win) * 100.0,
                        Amount(call),
                        Amount(ev)
                    ),
                    components: vec![
                        FormulaComponent::percent("Win probability", win * 100.0),
                        FormulaComponent::amount("Pot", pot),
                        FormulaComponent::amount("Bet", bet),
                        FormulaComponent::amount("Call amount", call),
                        FormulaComponent::amount("Total pot if called", total_if_called),
                        FormulaComponent::percent("Lose probability", (1.0 - win) * 100.0),
                        FormulaComponent::amount("EV", ev),
                    ],
                },
            );
        } else {
            let ev = win * pot;
            per_action.insert(
                Action::Check,
                ActionEv {
                    action: Action::Check,
                    ev,
                    formula: format!(
                        "EV(Check) = {:.1}% × {} = {}",
                        win * 100.0,
                        Amount(pot),
                        Amount(ev)
                    ),
                    components: vec![
                        FormulaComponent::percent("Win probability", win * 100.0),
                        FormulaComponent::amount("Pot", pot),
                        FormulaComponent::amount("EV", ev),
                    ],
                },
            );
        }

        let raise_size = if call > 0.0 {
            bet
        } else {
            bet.max(input.raise_pot_fraction * pot).max(1.0)
        };

        let ev = fe * (pot + raise_size) - (1.0 - fe) * raise_size;
        per_action.insert(
            Action::Raise,
            ActionEv {
                action: Action::Raise,
                ev,
                formula: format!(
                    "EV(Raise) = {:.1}% × ({} + {}) - {:.1}% × {} = {}",
                    fe * 100.0,
                    Amount(pot),
                    Amount(raise_size),
                    (1.0 - fe) * 100.0,
                    Amount(raise_size),
                    Amount(ev)
                ),
                components: vec![
                    FormulaComponent::percent("Fold equity", fe * 100.0),
                    FormulaComponent::amount("Pot", pot),
                    FormulaComponent::amount("Raise size", raise_size),
                    FormulaComponent::percent("Called probability", (1.0 - fe) * 100.0),
                    FormulaComponent::amount("EV", ev),
                ],
            },
        );

        let mut optimal_action = Action::Fold;
        let mut best = f64::NEG_INFINITY;
        for (&action, action_ev) in &per_action {
            if action_ev.ev > best {
                best = action_ev.ev;
                optimal_action = action;
            }
        }

        let implied_odds_needed = if win > 0.0 {
            (call / win - total_if_called).max(0.0)
        } else {
            0.0
        };

        EvResult {
            per_action,
            optimal_action,
            required_equity,
            hero_equity: input.equity,
            fold_equity: fe * 100.0,
            raise_size,
            implied_odds_needed,
        }
    }

    /// The expected value of an action if the action is legal.
    pub fn ev(&self, action: Action) -> Option<f64> {
        self.per_action.get(&action).map(|a| a.ev)
    }

    /// Formats an explanation of the best action.
    pub fn explain(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Equity {:.1}% | Required {:.1}% | Fold equity {:.1}%",
            self.hero_equity, self.required_equity, self.fold_equity
        );

        if self.per_action.contains_key(&Action::Call) {
            let verdict = if self.hero_equity >= self.required_equity {
                "enough"
            } else {
                "not enough"
            };

            let _ = writeln!(
                out,
                "Pot odds: {:.1}% equity is {verdict} against the {:.1}% needed to call.",
                self.hero_equity, self.required_equity
            );

            if self.implied_odds_needed > 0.0 {
                let _ = writeln!(
                    out,
                    "Implied odds: a call needs {} more in future winnings to break even.",
                    Amount(self.implied_odds_needed)
                );
            }
        }

        for action_ev in self.per_action.values() {
            let _ = writeln!(out, "{}", action_ev.formula);
        }

        let best = self.ev(self.optimal_action).unwrap_or_default();
        let _ = write!(
            out,
            "Best action: {} (EV {}).",
            self.optimal_action,
            Amount(best)
        );

        out
    }
}
