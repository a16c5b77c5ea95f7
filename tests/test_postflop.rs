use approx::assert_relative_eq;
use poker_advisor::config::AdvisorConfig;
use poker_advisor::decision::{Action, Decision};
use poker_advisor::game_state::{GameState, Position};
use poker_advisor::postflop::*;

fn state(position: Position, num_players: u8, pot: f64, bet: f64, stack: f64) -> GameState {
    GameState {
        position,
        num_players,
        pot_size: pot,
        current_bet: bet,
        stack_size: stack,
    }
}

fn decide(strength: f64, st: &GameState) -> Decision {
    postflop_decision(strength, st, &AdvisorConfig::default())
}

#[test]
fn test_metrics() {
    let st = state(Position::Middle, 4, 100.0, 25.0, 500.0);
    let m = PostflopMetrics::compute(0.6, &st, &AdvisorConfig::default());
    assert_relative_eq!(m.position_multiplier, 0.85, epsilon = 1e-9);
    assert_relative_eq!(m.player_adjustment, 0.8, epsilon = 1e-9);
    assert_relative_eq!(m.final_strength, 0.6 * 0.85 * 0.8, epsilon = 1e-9);
    assert_relative_eq!(m.pot_odds, 0.2, epsilon = 1e-9);
    assert_relative_eq!(m.spr, 5.0, epsilon = 1e-9);
}

#[test]
fn test_metrics_empty_pot() {
    let st = state(Position::Late, 2, 0.0, 0.0, 300.0);
    let m = PostflopMetrics::compute(0.5, &st, &AdvisorConfig::default());
    assert_relative_eq!(m.pot_odds, 0.0, epsilon = 1e-9);
    assert_relative_eq!(m.spr, 300.0, epsilon = 1e-9);
}

#[test]
fn test_value_raise() {
    let st = state(Position::Late, 2, 100.0, 20.0, 1000.0);
    assert_eq!(decide(1.0, &st), Decision::raise(75.0));
}

#[test]
fn test_value_raise_capped_by_stack() {
    let st = state(Position::Late, 2, 100.0, 20.0, 50.0);
    let d = decide(1.0, &st);
    assert_eq!(d, Decision::raise(50.0));
    assert!(d.amount <= st.stack_size);
}

#[test]
fn test_value_raise_never_exceeds_stack() {
    for stack in [0.0, 10.0, 74.9, 75.0, 1000.0] {
        let st = state(Position::Late, 2, 100.0, 20.0, stack);
        let d = decide(0.95, &st);
        assert_eq!(d.action, Action::Raise);
        assert!(d.amount <= stack);
        assert_eq!(d.amount, (100.0f64 * 0.75).min(stack).floor());
    }
}

#[test]
fn test_position_raise_deep_and_late() {
    let st = state(Position::Late, 2, 100.0, 20.0, 1000.0);
    assert_eq!(decide(0.85, &st), Decision::raise(50.0));
}

#[test]
fn test_strong_hand_shallow_calls() {
    let st = state(Position::Late, 2, 100.0, 20.0, 200.0);
    assert_eq!(decide(0.85, &st), Decision::call(20.0));
}

#[test]
fn test_strong_hand_out_of_position_calls() {
    let st = state(Position::Middle, 2, 100.0, 20.0, 1000.0);
    assert_eq!(decide(0.85, &st), Decision::call(20.0));
}

#[test]
fn test_strong_hand_bad_price_folds() {
    let st = state(Position::Middle, 2, 100.0, 1000.0, 1000.0);
    assert_eq!(decide(0.85, &st), Decision::fold());
}

#[test]
fn test_marginal_call() {
    let st = state(Position::Late, 2, 100.0, 20.0, 1000.0);
    assert_eq!(decide(0.6, &st), Decision::call(20.0));
}

#[test]
fn test_marginal_hand_too_expensive() {
    let st = state(Position::Late, 2, 100.0, 50.0, 1000.0);
    assert_eq!(decide(0.6, &st), Decision::fold());
}

#[test]
fn test_weak_hand_folds() {
    let st = state(Position::Late, 2, 100.0, 0.0, 1000.0);
    assert_eq!(decide(0.3, &st), Decision::fold());
}

#[test]
fn test_full_table_shrinks_strength() {
    // 0.9 * 1.0 * 0.6 = 0.54: only a marginal hand at nine players
    let st = state(Position::Late, 9, 100.0, 20.0, 1000.0);
    let m = PostflopMetrics::compute(0.9, &st, &AdvisorConfig::default());
    assert_relative_eq!(m.final_strength, 0.54, epsilon = 1e-9);
    assert_eq!(matching_rule(&m, &st).name, "marginal_call");
}

#[test]
fn test_custom_position_weights() {
    let st = state(Position::Late, 2, 100.0, 20.0, 1000.0);
    let timid = AdvisorConfig::default().with_position_weight(Position::Late, 0.5);
    // 1.0 * 0.5 * 0.9 = 0.45, pot odds 1/6 < 0.225
    assert_eq!(postflop_decision(1.0, &st, &timid), Decision::call(20.0));
}

#[test]
fn test_fallback_weight_for_missing_position() {
    let mut config = AdvisorConfig::default();
    config.position_weights.remove(&Position::Blind);
    let st = state(Position::Blind, 2, 100.0, 20.0, 1000.0);
    let m = PostflopMetrics::compute(1.0, &st, &config);
    assert_relative_eq!(m.position_multiplier, 0.8, epsilon = 1e-9);
}

#[test]
fn test_rule_order() {
    let names: Vec<&str> = POSTFLOP_RULES.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["value_raise", "position_raise", "strong_call", "marginal_call"]);
}

#[test]
fn test_apply_rules_pairs_rule_with_its_decision() {
    let config = AdvisorConfig::default();
    let st = state(Position::Late, 2, 100.0, 20.0, 1000.0);
    let m = PostflopMetrics::compute(0.85, &st, &config);
    let (rule, decision) = apply_rules(&m, &st);
    assert_eq!(rule.name, "position_raise");
    assert_eq!(decision, Decision::raise(50.0));
    assert_eq!(decision, postflop_decision(0.85, &st, &config));

    let m = PostflopMetrics::compute(0.2, &st, &config);
    assert_eq!(apply_rules(&m, &st).0.name, "default_fold");
}
