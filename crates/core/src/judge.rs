// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Action review.
//!
//! A player action is judged twice, against the expected value optimal
//! action and against a table of rules of thumb keyed on the made hand, the
//! draw and the bet size.
use serde::Serialize;
use std::fmt;

use handcoach_eval::{Card, Draw, EvaluatedHand, HandCategory};

use crate::{
    ev::EvResult,
    poker::{Action, Amount},
};

/// The size of the bet the hero is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BetBucket {
    /// Nothing to call.
    None,
    /// A call below the large bet threshold.
    Small,
    /// A call of at least the large bet fraction of the pot.
    Large,
}

impl BetBucket {
    /// Buckets the amount to call against the pot.
    pub fn new(amount_to_call: f64, pot: f64, large_bet_fraction: f64) -> BetBucket {
        if amount_to_call <= 0.0 {
            BetBucket::None
        } else if amount_to_call >= large_bet_fraction * pot {
            BetBucket::Large
        } else {
            BetBucket::Small
        }
    }
}

impl fmt::Display for BetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BetBucket::None => "no bet",
            BetBucket::Small => "a small bet",
            BetBucket::Large => "a large bet",
        };

        write!(f, "{s}")
    }
}

/// The facts the rule table is matched against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleContext {
    /// The made hand category.
    pub category: HandCategory,
    /// The unmade draw if any.
    pub draw: Option<Draw>,
    /// The bet the hero is facing.
    pub bet: BetBucket,
    /// The number of opponents.
    pub opponents: u8,
    /// The kicker rank value for a paired hand.
    pub kicker: u8,
    /// The highest hole card rank value.
    pub high_card: u8,
}

impl RuleContext {
    /// Builds the context for a made hand and the hero hole cards.
    pub fn new(
        hand: &EvaluatedHand,
        draw: Option<Draw>,
        hero: &[Card],
        bet: BetBucket,
        opponents: u8,
    ) -> Self {
        let high_card = hero.iter().map(|c| c.rank_bits()).max().unwrap_or_default();

        // The first key entry is the paired rank for paired categories.
        let paired = hand.key()[0];
        let kicker = hero
            .iter()
            .map(|c| c.rank_bits())
            .filter(|&r| r != paired)
            .max()
            .unwrap_or(paired);

        Self {
            category: hand.category(),
            draw,
            bet,
            opponents,
            kicker,
            high_card,
        }
    }
}

const ACE: u8 = 14;
const KING: u8 = 13;

/// A rule of thumb, it applies when its predicate matches.
pub struct Rule {
    /// A short rule name.
    pub name: &'static str,
    /// The rule predicate.
    pub applies: fn(&RuleContext) -> bool,
    /// The recommended action.
    pub action: Action,
    /// Why the action is recommended.
    pub reason: &'static str,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("action", &self.action)
            .finish()
    }
}

/// The rules of thumb in match order, the first that applies wins.
pub static RULES: &[Rule] = &[
    Rule {
        name: "monster",
        applies: |c| c.category >= HandCategory::Flush,
        action: Action::Raise,
        reason: "A flush or better is strong enough to build the pot.",
    },
    Rule {
        name: "strong-vs-large",
        applies: |c| c.category >= HandCategory::TwoPair && c.bet == BetBucket::Large,
        action: Action::Call,
        reason: "A strong made hand can call a large bet but risks a bigger hand.",
    },
    Rule {
        name: "strong",
        applies: |c| c.category >= HandCategory::TwoPair,
        action: Action::Raise,
        reason: "Two pair or better should raise for value.",
    },
    Rule {
        name: "pair-ace-kicker",
        applies: |c| {
            c.category == HandCategory::Pair && c.kicker == ACE && c.bet != BetBucket::Large
        },
        action: Action::Raise,
        reason: "A pair with an ace kicker is ahead of most hands, raise for value.",
    },
    Rule {
        name: "pair-small-bet",
        applies: |c| c.category == HandCategory::Pair && c.bet == BetBucket::Small,
        action: Action::Call,
        reason: "A pair can call a small bet.",
    },
    Rule {
        name: "pair-good-kicker-large-bet",
        applies: |c| {
            c.category == HandCategory::Pair
                && c.bet == BetBucket::Large
                && (c.kicker == ACE || (c.kicker == KING && c.opponents <= 2))
        },
        action: Action::Call,
        reason: "A pair with a strong kicker can call a large bet against few opponents.",
    },
    Rule {
        name: "pair-large-bet",
        applies: |c| c.category == HandCategory::Pair && c.bet == BetBucket::Large,
        action: Action::Fold,
        reason: "A pair with a weak kicker is often behind a large bet.",
    },
    Rule {
        name: "multiway-flush-draw",
        applies: |c| c.draw == Some(Draw::Flush) && c.opponents >= 3,
        action: Action::Call,
        reason: "A flush draw gets a good price against several opponents.",
    },
    Rule {
        name: "draw-cheap",
        applies: |c| c.draw.is_some() && c.bet != BetBucket::Large,
        action: Action::Call,
        reason: "A draw can continue when the price is small.",
    },
    Rule {
        name: "draw-large-bet",
        applies: |c| c.draw.is_some(),
        action: Action::Fold,
        reason: "A draw does not get the right price against a large bet.",
    },
    Rule {
        name: "ace-high",
        applies: |c| {
            c.category == HandCategory::HighCard && c.high_card == ACE && c.bet != BetBucket::Large
        },
        action: Action::Call,
        reason: "Ace high has showdown value against a small bet.",
    },
    Rule {
        name: "king-high",
        applies: |c| {
            c.category == HandCategory::HighCard && c.high_card == KING && c.bet == BetBucket::Small
        },
        action: Action::Call,
        reason: "King high can call a small bet.",
    },
    Rule {
        name: "high-card",
        applies: |c| c.category == HandCategory::HighCard,
        action: Action::Fold,
        reason: "A weak high card hand should give up.",
    },
    Rule {
        name: "default-cheap",
        applies: |c| c.bet != BetBucket::Large,
        action: Action::Call,
        reason: "The price is small enough to continue.",
    },
    Rule {
        name: "default",
        applies: |_| true,
        action: Action::Fold,
        reason: "The bet is too large for this hand.",
    },
];

/// Returns the first rule that applies to the context.
pub fn matching_rule(ctx: &RuleContext) -> &'static Rule {
    RULES
        .iter()
        .find(|r| (r.applies)(ctx))
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// The judgment of an action against a recommended action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgment {
    /// The action the player chose.
    pub user_action: Action,
    /// The recommended action.
    pub recommended: Action,
    /// Whether the player chose the recommended action.
    pub correct: bool,
    /// The recommendation justification.
    pub reason: String,
}

/// Both judgments of a player action and the message to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// The expected value judgment if an expected value is available.
    pub ev: Option<Judgment>,
    /// The rule of thumb judgment.
    pub rules: Judgment,
    /// The message to show the player.
    pub message: String,
}

impl Verdict {
    /// Judges a player action.
    ///
    /// Check and call are the same action when there is nothing to call.
    pub fn new(
        user_action: Action,
        amount_to_call: f64,
        ev: Option<&EvResult>,
        ctx: &RuleContext,
    ) -> Verdict {
        let user_action = user_action.normalize(amount_to_call);

        let ev = ev.map(|res| {
            let recommended = res.optimal_action.normalize(amount_to_call);
            let correct = user_action == recommended;
            let best = res.ev(recommended).unwrap_or_default();

            let summary = if correct {
                format!("{user_action} is the best action with EV {}.", Amount(best))
            } else {
                match res.ev(user_action) {
                    Some(ev) => format!(
                        "{user_action} has EV {}, {recommended} is better with EV {}.",
                        Amount(ev),
                        Amount(best)
                    ),
                    None => format!(
                        "{user_action} is not available, {recommended} is best with EV {}.",
                        Amount(best)
                    ),
                }
            };

            Judgment {
                user_action,
                recommended,
                correct,
                reason: format!("{summary}\n{}", res.explain()),
            }
        });

        let rule = matching_rule(ctx);
        let recommended = rule.action.normalize(amount_to_call);
        let rules = Judgment {
            user_action,
            recommended,
            correct: user_action == recommended,
            reason: format!("{} Facing {}, {recommended}.", rule.reason, ctx.bet),
        };

        let message = ev
            .as_ref()
            .map(|j| j.reason.clone())
            .unwrap_or_else(|| rules.reason.clone());

        Verdict { ev, rules, message }
    }
}
