use serde::Serialize;

use crate::config::AdvisorConfig;
use crate::decision::Decision;
use crate::game_state::{GameState, Position};
use crate::math_engine::{player_adjustment, pot_odds, stack_to_pot};

/// Inputs the postflop rules look at, derived from the hand strength and the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostflopMetrics {
    pub hand_strength: f64,
    pub position_multiplier: f64,
    pub player_adjustment: f64,
    pub final_strength: f64,
    pub pot_odds: f64,
    pub spr: f64,
}

impl PostflopMetrics {
    pub fn compute(hand_strength: f64, state: &GameState, config: &AdvisorConfig) -> Self {
        let position_multiplier = config.position_multiplier(state.position);
        let player_adjustment = player_adjustment(state.num_players);
        PostflopMetrics {
            hand_strength,
            position_multiplier,
            player_adjustment,
            final_strength: hand_strength * position_multiplier * player_adjustment,
            pot_odds: pot_odds(state.pot_size, state.current_bet),
            spr: stack_to_pot(state.stack_size, state.pot_size),
        }
    }
}

pub struct PostflopRule {
    pub name: &'static str,
    pub matches: fn(&PostflopMetrics, &GameState) -> bool,
    pub decide: fn(&PostflopMetrics, &GameState) -> Decision,
}

fn is_strong(m: &PostflopMetrics) -> bool {
    m.final_strength > 0.6 && m.final_strength <= 0.8
}

fn value_hand(m: &PostflopMetrics, _: &GameState) -> bool {
    m.final_strength > 0.8
}

// Never more than the stack.
fn value_raise(_: &PostflopMetrics, state: &GameState) -> Decision {
    Decision::raise((state.pot_size * 0.75).min(state.stack_size))
}

fn deep_in_position(m: &PostflopMetrics, state: &GameState) -> bool {
    is_strong(m) && m.spr > 3.0 && state.position == Position::Late
}

fn half_pot_raise(_: &PostflopMetrics, state: &GameState) -> Decision {
    Decision::raise(state.pot_size * 0.5)
}

fn priced_in(m: &PostflopMetrics, _: &GameState) -> bool {
    is_strong(m) && m.pot_odds < m.final_strength
}

fn cheap_enough(m: &PostflopMetrics, _: &GameState) -> bool {
    m.final_strength > 0.4 && m.pot_odds < m.final_strength / 2.0
}

fn call(_: &PostflopMetrics, state: &GameState) -> Decision {
    Decision::call(state.current_bet)
}

fn always(_: &PostflopMetrics, _: &GameState) -> bool {
    true
}

fn fold(_: &PostflopMetrics, _: &GameState) -> Decision {
    Decision::fold()
}

pub const POSTFLOP_RULES: &[PostflopRule] = &[
    PostflopRule {
        name: "value_raise",
        matches: value_hand,
        decide: value_raise,
    },
    PostflopRule {
        name: "position_raise",
        matches: deep_in_position,
        decide: half_pot_raise,
    },
    PostflopRule {
        name: "strong_call",
        matches: priced_in,
        decide: call,
    },
    PostflopRule {
        name: "marginal_call",
        matches: cheap_enough,
        decide: call,
    },
];

pub static DEFAULT_RULE: PostflopRule = PostflopRule {
    name: "default_fold",
    matches: always,
    decide: fold,
};

pub fn matching_rule(metrics: &PostflopMetrics, state: &GameState) -> &'static PostflopRule {
    POSTFLOP_RULES
        .iter()
        .find(|rule| (rule.matches)(metrics, state))
        .unwrap_or(&DEFAULT_RULE)
}

/// The first matching rule and the decision it makes.
pub fn apply_rules(metrics: &PostflopMetrics, state: &GameState) -> (&'static PostflopRule, Decision) {
    let rule = matching_rule(metrics, state);
    (rule, (rule.decide)(metrics, state))
}

pub fn postflop_decision(hand_strength: f64, state: &GameState, config: &AdvisorConfig) -> Decision {
    let metrics = PostflopMetrics::compute(hand_strength, state, config);
    apply_rules(&metrics, state).1
}
