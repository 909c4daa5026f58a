// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Decision point analysis pipeline.
use ahash::AHashSet;
use log::{debug, warn};
use serde::Serialize;
use std::fmt::Write;

use handcoach_eval::{BestHand, Card, OutsReport};

use crate::{
    config::Config,
    equity,
    error::AnalysisError,
    ev::{EvInput, EvResult},
    judge::{BetBucket, RuleContext, Verdict},
    poker::{Action, Archetype, DecisionInput, Street},
};

/// The analysis of a decision point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReport {
    /// The betting street.
    pub street: Street,
    /// The hole cards class, like `AKs`.
    pub hand_class: String,
    /// The best made hand and draw.
    pub best: BestHand,
    /// The outs to improve the hand.
    pub outs: OutsReport,
    /// The expected value of each action.
    pub ev: EvResult,
    /// The opponent profile.
    pub archetype: Archetype,
    /// The number of opponents.
    pub num_opponents: u8,
    /// The pot used for the analysis.
    pub pot_size: f64,
    /// The amount to call used for the analysis.
    pub amount_to_call: f64,
    /// The effective stack divided by the pot, zero with no pot.
    pub stack_to_pot: f64,
    /// The analysis explanation.
    pub explanation: String,
}

/// A reviewed player action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// The decision point analysis.
    pub report: DecisionReport,
    /// The player action judgment.
    pub verdict: Verdict,
}

/// Analyzes decision points.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The analyzer configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes a decision point.
    pub fn analyze(&self, input: &DecisionInput) -> Result<DecisionReport, AnalysisError> {
        let street = validate(input)?;
        let (c1, c2) = (input.hero[0], input.hero[1]);

        let pot = sanitize("pot size", input.pot_size);
        let bet = sanitize("bet size", input.bet_size);
        let call = sanitize("amount to call", input.amount_to_call);
        let stack = sanitize("effective stack", input.effective_stack);

        let pool = input
            .hero
            .iter()
            .chain(&input.board)
            .copied()
            .collect::<Vec<_>>();
        let best = BestHand::select(&pool);
        let outs = OutsReport::find(&input.hero, &input.board);
        let hand_class = equity::hand_class(c1, c2);
        let hero_equity = equity::estimate(street, c1, c2, outs.total);

        let fold_equity = match self.config.fold_equity {
            Some(fe) => sanitize("fold equity", fe).min(1.0),
            None => input.archetype.fold_equity(),
        };

        let ev = EvResult::compute(&EvInput {
            pot,
            bet_size: bet,
            amount_to_call: call,
            equity: hero_equity,
            fold_equity,
            raise_pot_fraction: self.config.raise_pot_fraction,
        });

        debug!(
            "{street} {hand_class} {} outs {} equity {hero_equity:.1}% best {}",
            best.hand.category(),
            outs.total,
            ev.optimal_action
        );

        let stack_to_pot = if pot > 0.0 { stack / pot } else { 0.0 };

        let mut report = DecisionReport {
            street,
            hand_class,
            best,
            outs,
            ev,
            archetype: input.archetype,
            num_opponents: input.num_opponents,
            pot_size: pot,
            amount_to_call: call,
            stack_to_pot,
            explanation: String::new(),
        };

        report.explanation = explain(&report);
        Ok(report)
    }

    /// Analyzes a decision point and judges the player action.
    pub fn review(&self, input: &DecisionInput, action: Action) -> Result<Review, AnalysisError> {
        let report = self.analyze(input)?;

        let bet = BetBucket::new(
            report.amount_to_call,
            report.pot_size,
            self.config.large_bet_fraction,
        );

        let ctx = RuleContext::new(
            &report.best.hand,
            report.best.draw,
            &input.hero,
            bet,
            report.num_opponents,
        );

        let verdict = Verdict::new(action, report.amount_to_call, Some(&report.ev), &ctx);
        debug!(
            "{} ev {:?} rules {}",
            action,
            verdict.ev.as_ref().map(|j| j.recommended),
            verdict.rules.recommended
        );

        Ok(Review { report, verdict })
    }
}

/// Checks the cards and returns the street.
fn validate(input: &DecisionInput) -> Result<Street, AnalysisError> {
    match input.hero.len() {
        0 | 1 => return Err(AnalysisError::InsufficientCards(input.hero.len())),
        2 => {}
        n => return Err(AnalysisError::TooManyHoleCards(n)),
    }

    let street = Street::from_board(&input.board)?;

    let mut seen = AHashSet::with_capacity(7);
    for &card in input.hero.iter().chain(&input.board) {
        if !seen.insert(card) {
            return Err(AnalysisError::DuplicateCard(card));
        }
    }

    Ok(street)
}

/// Coerces non finite and negative amounts to zero.
fn sanitize(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("Invalid {name} {value}, using zero");
        0.0
    }
}

fn cards_list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn explain(report: &DecisionReport) -> String {
    let mut out = String::new();
    let hand = &report.best.hand;

    let _ = write!(
        out,
        "{}: {} makes {}",
        report.street,
        report.hand_class,
        hand.category()
    );
    if let Some(draw) = report.best.draw {
        let _ = write!(out, " with a {draw}");
    }
    let _ = writeln!(out, " ({}).", cards_list(hand.cards()));

    if matches!(report.street, Street::Flop | Street::Turn) {
        let _ = writeln!(
            out,
            "Outs: {} ({}).",
            report.outs.total,
            cards_list(&report.outs.cards)
        );
    }

    let range = report.archetype.range();
    let _ = writeln!(
        out,
        "Opponents: {} {}, about {}% of hands ({}).",
        report.num_opponents,
        report.archetype,
        range.share,
        range.hands.join(", ")
    );

    if report.stack_to_pot > 0.0 {
        let _ = writeln!(out, "Stack to pot ratio: {:.1}.", report.stack_to_pot);
    }

    out.push_str(&report.ev.explain());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use handcoach_eval::{Draw, HandCategory};

    fn input(hero: &[&str], board: &[&str], pot: f64, bet: f64, call: f64) -> DecisionInput {
        DecisionInput {
            pot_size: pot,
            bet_size: bet,
            amount_to_call: call,
            ..DecisionInput::from_ids(hero, board).unwrap()
        }
    }

    #[test]
    fn flush_draw_on_the_flop() {
        let report = Analyzer::default()
            .analyze(&input(&["AH", "KH"], &["QH", "7H", "2D"], 20.0, 20.0, 20.0))
            .unwrap();

        assert_eq!(report.street, Street::Flop);
        assert_eq!(report.hand_class, "AKs");
        assert_eq!(report.best.hand.category(), HandCategory::HighCard);
        assert_eq!(report.best.draw, Some(Draw::Flush));
        assert_eq!(report.outs.total, 9);
        assert_eq!(report.ev.hero_equity, 35.0);
        assert_eq!(format!("{:.2}", report.ev.required_equity), "33.33");
        assert_eq!(report.ev.optimal_action, Action::Call);

        assert!(report.explanation.starts_with("Flop: AKs makes High Card with a Flush Draw"));
        assert!(report.explanation.contains("Outs: 9 (0H 2H 3H"));
    }

    #[test]
    fn preflop_and_river() {
        let analyzer = Analyzer::default();

        let report = analyzer.analyze(&input(&["QH", "QD"], &[], 3.0, 2.0, 2.0)).unwrap();
        assert_eq!(report.street, Street::Preflop);
        assert_eq!(report.ev.hero_equity, 68.0);
        assert_eq!(report.outs, OutsReport::default());
        assert!(!report.explanation.contains("Outs:"));

        let board = ["QH", "7H", "2D", "3C", "9S"];
        let report = analyzer.analyze(&input(&["AH", "KH"], &board, 50.0, 0.0, 0.0)).unwrap();
        assert_eq!(report.street, Street::River);
        assert_eq!(report.ev.hero_equity, 5.0);
        assert_eq!(report.outs.total, 0);
        assert!(report.ev.per_action.contains_key(&Action::Check));
        assert!(!report.ev.per_action.contains_key(&Action::Call));
    }

    #[test]
    fn invalid_inputs() {
        let analyzer = Analyzer::default();

        let mut bad = input(&["AH", "KH"], &["QH", "7H", "2D"], 1.0, 1.0, 1.0);
        bad.hero.pop();
        assert_eq!(
            analyzer.analyze(&bad),
            Err(AnalysisError::InsufficientCards(1))
        );

        bad.hero = Card::parse_many(&["AH", "KH", "3C"]).unwrap();
        assert_eq!(
            analyzer.analyze(&bad),
            Err(AnalysisError::TooManyHoleCards(3))
        );

        let bad = input(&["AH", "KH"], &["QH", "7H"], 1.0, 1.0, 1.0);
        assert_eq!(analyzer.analyze(&bad), Err(AnalysisError::InvalidBoard(2)));

        let bad = input(&["AH", "KH"], &["QH", "AH", "2D"], 1.0, 1.0, 1.0);
        assert_eq!(
            analyzer.analyze(&bad),
            Err(AnalysisError::DuplicateCard("AH".parse().unwrap()))
        );
    }

    #[test]
    fn non_finite_amounts() {
        let report = Analyzer::default()
            .analyze(&input(&["AH", "KH"], &["QH", "7H", "2D"], f64::NAN, -5.0, f64::INFINITY))
            .unwrap();

        assert_eq!(report.pot_size, 0.0);
        assert_eq!(report.amount_to_call, 0.0);

        // Zero pot, bet and call is absorbed as zero required equity.
        assert_eq!(report.ev.required_equity, 0.0);
        assert_eq!(report.ev.raise_size, 1.0);
        assert_eq!(report.stack_to_pot, 0.0);
    }

    #[test]
    fn config_overrides() {
        let analyzer = Analyzer::new(Config {
            fold_equity: Some(0.9),
            raise_pot_fraction: 1.0,
            ..Config::default()
        });

        let report = analyzer
            .analyze(&input(&["7C", "2D"], &["KH", "QS", "9D"], 40.0, 0.0, 0.0))
            .unwrap();

        assert_eq!(report.ev.fold_equity, 90.0);
        assert_eq!(report.ev.raise_size, 40.0);
        assert_eq!(report.ev.optimal_action, Action::Raise);
    }

    #[test]
    fn stack_to_pot() {
        let mut input = input(&["AH", "KH"], &[], 10.0, 0.0, 0.0);
        input.effective_stack = 95.0;
        let report = Analyzer::default().analyze(&input).unwrap();
        assert_eq!(report.stack_to_pot, 9.5);
        assert!(report.explanation.contains("Stack to pot ratio: 9.5."));
    }

    #[test]
    fn review_actions() {
        let analyzer = Analyzer::default();
        let input = input(&["AH", "KH"], &["QH", "7H", "2D"], 20.0, 20.0, 20.0);

        let review = analyzer.review(&input, Action::Call).unwrap();
        assert!(review.verdict.ev.as_ref().unwrap().correct);

        // Facing a pot sized bet heads up the rules say fold the draw.
        assert_eq!(review.verdict.rules.recommended, Action::Fold);
        assert!(review.verdict.message.starts_with("Call is the best action"));

        let review = analyzer.review(&input, Action::Fold).unwrap();
        assert!(!review.verdict.ev.unwrap().correct);
        assert!(review.verdict.rules.correct);
    }

    #[test]
    fn random_decisions() {
        use handcoach_eval::Deck;
        use rand::prelude::*;

        let analyzer = Analyzer::default();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..300 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let n_board = [0, 3, 4, 5].choose(&mut rng).copied().unwrap();
            let pot = rng.random_range(0..100) as f64;
            let call = [0.0, pot / 4.0, pot].choose(&mut rng).copied().unwrap();

            let input = DecisionInput {
                pot_size: pot,
                bet_size: call,
                amount_to_call: call,
                num_opponents: rng.random_range(1..=5),
                hero: (0..2).filter_map(|_| deck.deal()).collect(),
                board: (0..n_board).filter_map(|_| deck.deal()).collect(),
                ..DecisionInput::default()
            };

            let review = analyzer.review(&input, Action::Call).unwrap();
            let ev = &review.report.ev;

            assert_eq!(ev.ev(Action::Fold), Some(0.0));
            assert_eq!(ev.per_action.contains_key(&Action::Check), call == 0.0);
            assert_eq!(ev.per_action.contains_key(&Action::Call), call > 0.0);
            assert!((0.0..=100.0).contains(&ev.hero_equity));

            let best = ev.ev(ev.optimal_action).unwrap();
            assert!(ev.per_action.values().all(|a| a.ev <= best));
        }
    }

    #[test]
    fn analysis_is_idempotent() {
        let analyzer = Analyzer::default();
        let input = input(&["8H", "9H"], &["0H", "JS", "2H", "3C"], 30.0, 15.0, 15.0);

        let first = serde_json::to_string(&analyzer.analyze(&input).unwrap()).unwrap();
        let second = serde_json::to_string(&analyzer.analyze(&input).unwrap()).unwrap();
        assert_eq!(first, second);

        let review = analyzer.review(&input, Action::Raise).unwrap();
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["report"]["street"], "Turn");
        assert_eq!(json["report"]["best"]["draw"], "Flush Draw");
        assert_eq!(json["report"]["ev"]["optimal_action"], "Call");
    }
}
