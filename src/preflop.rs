//! Preflop rule tree. Rules run in order and the first match decides.

use crate::cards::Card;
use crate::decision::Decision;
use crate::error::AdvisorResult;
use crate::game_state::{GameState, Position};
use crate::hand_evaluator::check_hand_shape;
use crate::math_engine::set_odds;

/// Shape of two hole cards, independent of the order they were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleShape {
    pub high: u8,
    pub low: u8,
    pub pair: bool,
    pub suited: bool,
    pub connected: bool,
}

impl HoleShape {
    pub fn new(first: Card, second: Card) -> Self {
        let (a, b) = (first.value(), second.value());
        HoleShape {
            high: a.max(b),
            low: a.min(b),
            pair: a == b,
            suited: first.suit == second.suit,
            connected: a.abs_diff(b) == 1,
        }
    }

    pub fn from_cards(hole_cards: &[Card]) -> AdvisorResult<Self> {
        check_hand_shape(hole_cards, &[])?;
        Ok(HoleShape::new(hole_cards[0], hole_cards[1]))
    }

    pub fn has_ace(&self) -> bool {
        self.high == 14
    }
}

pub struct PreflopRule {
    pub name: &'static str,
    pub matches: fn(&HoleShape, &GameState) -> bool,
    pub decide: fn(&HoleShape, &GameState) -> Decision,
}

fn is_late(state: &GameState) -> bool {
    state.position == Position::Late
}

fn is_early(state: &GameState) -> bool {
    state.position == Position::Early
}

fn call_late_else_fold(_: &HoleShape, state: &GameState) -> Decision {
    if is_late(state) {
        Decision::call(state.current_bet)
    } else {
        Decision::fold()
    }
}

// QQ+
fn premium_pair(h: &HoleShape, _: &GameState) -> bool {
    h.pair && h.high >= 12
}

fn raise_four_pots(_: &HoleShape, state: &GameState) -> Decision {
    Decision::raise(state.pot_size * 4.0)
}

// 88-JJ
fn medium_pair(h: &HoleShape, _: &GameState) -> bool {
    h.pair && (8..=11).contains(&h.high)
}

fn play_medium_pair(_: &HoleShape, state: &GameState) -> Decision {
    if is_early(state) {
        Decision::call(state.current_bet)
    } else {
        Decision::raise(state.pot_size * 2.5)
    }
}

// 22-77
fn small_pair(h: &HoleShape, _: &GameState) -> bool {
    h.pair && h.high < 8
}

fn set_mine(_: &HoleShape, state: &GameState) -> Decision {
    if is_late(state) && state.num_players <= 4 {
        return Decision::call(state.current_bet);
    }
    // NaN (no bet, no stack) compares false and folds.
    if set_odds(state.current_bet, state.stack_size) <= 0.15 {
        Decision::call(state.current_bet)
    } else {
        Decision::fold()
    }
}

// AK, KQ, AQs, AJs
fn premium_unpaired(h: &HoleShape, _: &GameState) -> bool {
    !h.pair && ((h.low >= 12 && h.high >= 13) || (h.has_ace() && h.low >= 11 && h.suited))
}

fn raise_three_pots(_: &HoleShape, state: &GameState) -> Decision {
    Decision::raise(state.pot_size * 3.0)
}

fn strong_ace(h: &HoleShape, _: &GameState) -> bool {
    h.has_ace() && (h.low >= 10 || h.suited)
}

fn play_strong_ace(_: &HoleShape, state: &GameState) -> Decision {
    if is_early(state) {
        Decision::call(state.current_bet)
    } else {
        Decision::raise(state.pot_size * 2.0)
    }
}

fn late_ace(h: &HoleShape, state: &GameState) -> bool {
    h.has_ace() && is_late(state)
}

fn call(_: &HoleShape, state: &GameState) -> Decision {
    Decision::call(state.current_bet)
}

fn suited_connector(h: &HoleShape, _: &GameState) -> bool {
    h.suited && h.connected && h.low >= 4
}

fn broadway(h: &HoleShape, _: &GameState) -> bool {
    h.low >= 11
}

fn late_speculative(h: &HoleShape, state: &GameState) -> bool {
    is_late(state) && h.suited && h.low >= 9
}

fn always(_: &HoleShape, _: &GameState) -> bool {
    true
}

fn fold(_: &HoleShape, _: &GameState) -> Decision {
    Decision::fold()
}

/// Weak aces outside late position match neither ace rule and fall through.
pub const PREFLOP_RULES: &[PreflopRule] = &[
    PreflopRule {
        name: "premium_pair",
        matches: premium_pair,
        decide: raise_four_pots,
    },
    PreflopRule {
        name: "medium_pair",
        matches: medium_pair,
        decide: play_medium_pair,
    },
    PreflopRule {
        name: "small_pair",
        matches: small_pair,
        decide: set_mine,
    },
    PreflopRule {
        name: "premium_unpaired",
        matches: premium_unpaired,
        decide: raise_three_pots,
    },
    PreflopRule {
        name: "strong_ace",
        matches: strong_ace,
        decide: play_strong_ace,
    },
    PreflopRule {
        name: "late_ace",
        matches: late_ace,
        decide: call,
    },
    PreflopRule {
        name: "suited_connector",
        matches: suited_connector,
        decide: call_late_else_fold,
    },
    PreflopRule {
        name: "broadway",
        matches: broadway,
        decide: call_late_else_fold,
    },
    PreflopRule {
        name: "late_speculative",
        matches: late_speculative,
        decide: call,
    },
];

pub static DEFAULT_RULE: PreflopRule = PreflopRule {
    name: "default_fold",
    matches: always,
    decide: fold,
};

pub fn matching_rule(shape: &HoleShape, state: &GameState) -> &'static PreflopRule {
    PREFLOP_RULES
        .iter()
        .find(|rule| (rule.matches)(shape, state))
        .unwrap_or(&DEFAULT_RULE)
}

/// The first matching rule and the decision it makes.
pub fn apply_rules(shape: &HoleShape, state: &GameState) -> (&'static PreflopRule, Decision) {
    let rule = matching_rule(shape, state);
    (rule, (rule.decide)(shape, state))
}

pub fn preflop_decision(shape: &HoleShape, state: &GameState) -> Decision {
    apply_rules(shape, state).1
}
