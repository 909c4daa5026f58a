// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text rendering of analysis results.
use std::fmt::Write;

use handcoach_core::{
    Card, DecisionInput, DecisionReport, Review,
    judge::Judgment,
    poker::Amount,
};

/// Formats cards as space separated identifiers.
pub fn cards_list(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }

    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a decision analysis.
pub fn render_report(input: &DecisionInput, report: &DecisionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Hero {} | Board {} | Pot {} | To call {}",
        cards_list(&input.hero),
        cards_list(&input.board),
        Amount(report.pot_size),
        Amount(report.amount_to_call)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.explanation);
    let _ = writeln!(out);

    for (action, action_ev) in &report.ev.per_action {
        let marker = if *action == report.ev.optimal_action {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{marker} {:<6} {:>12}",
            action.label(),
            Amount(action_ev.ev).to_string()
        );
    }

    out.trim_end().to_string()
}

fn judgment_line(label: &str, judgment: &Judgment) -> String {
    let mark = if judgment.correct { "correct" } else { "wrong" };
    format!(
        "{label:<6} {} is {mark}, recommended {}",
        judgment.user_action, judgment.recommended
    )
}

/// Renders a reviewed action.
pub fn render_review(input: &DecisionInput, review: &Review) -> String {
    let mut out = render_report(input, &review.report);
    let verdict = &review.verdict;

    let _ = writeln!(out);
    let _ = writeln!(out);
    if let Some(ev) = &verdict.ev {
        let _ = writeln!(out, "{}", judgment_line("EV", ev));
    }
    let _ = writeln!(out, "{}", judgment_line("Rules", &verdict.rules));
    let _ = writeln!(out);

    // The EV message repeats the explanation already shown above.
    let summary = verdict.message.lines().next().unwrap_or_default();
    let _ = writeln!(out, "{summary}");
    let _ = write!(out, "{}", verdict.rules.reason);

    out
}
