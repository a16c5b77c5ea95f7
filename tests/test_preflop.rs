use poker_advisor::cards::*;
use poker_advisor::decision::{Action, Decision};
use poker_advisor::game_state::{GameState, Position, ALL_POSITIONS};
use poker_advisor::preflop::*;

fn shape(hand: &str) -> HoleShape {
    HoleShape::from_cards(&parse_board(hand).unwrap()).unwrap()
}

fn state(position: Position) -> GameState {
    GameState {
        position,
        num_players: 6,
        pot_size: 100.0,
        current_bet: 20.0,
        stack_size: 1000.0,
    }
}

fn decide(hand: &str, position: Position) -> Decision {
    preflop_decision(&shape(hand), &state(position))
}

fn rule(hand: &str, position: Position) -> &'static str {
    matching_rule(&shape(hand), &state(position)).name
}

#[test]
fn test_shape_is_order_independent() {
    assert_eq!(shape("Kh As"), shape("As Kh"));
    let s = shape("9s 8s");
    assert_eq!((s.high, s.low), (9, 8));
    assert!(s.suited && s.connected && !s.pair);
}

#[test]
fn test_shape_needs_two_cards() {
    assert!(HoleShape::from_cards(&parse_board("As").unwrap()).is_err());
}

#[test]
fn test_premium_pairs_raise_four_pots_everywhere() {
    for hand in ["Qs Qh", "Ks Kh", "As Ah"] {
        for position in ALL_POSITIONS {
            assert_eq!(decide(hand, position), Decision::raise(400.0), "{} {}", hand, position);
        }
    }
}

#[test]
fn test_raise_amount_is_floored() {
    let mut st = state(Position::Middle);
    st.pot_size = 15.0;
    let d = preflop_decision(&shape("Js Jh"), &st);
    assert_eq!(d.action, Action::Raise);
    assert_eq!(d.amount, 37.0);
}

#[test]
fn test_medium_pair_calls_early() {
    assert_eq!(decide("8s 8h", Position::Early), Decision::call(20.0));
    assert_eq!(decide("Js Jh", Position::Early), Decision::call(20.0));
}

#[test]
fn test_medium_pair_raises_elsewhere() {
    for position in [Position::Middle, Position::Late, Position::Blind] {
        assert_eq!(decide("9s 9h", position), Decision::raise(250.0));
    }
}

#[test]
fn test_small_pair_late_short_handed_calls() {
    let mut st = state(Position::Late);
    st.num_players = 4;
    st.current_bet = 500.0;
    assert_eq!(preflop_decision(&shape("2s 2h"), &st), Decision::call(500.0));
}

#[test]
fn test_small_pair_set_odds() {
    // 15 / (1000 * 0.1) = 0.15 -> call
    let mut st = state(Position::Early);
    st.current_bet = 15.0;
    assert_eq!(preflop_decision(&shape("7s 7h"), &st), Decision::call(15.0));
    // 20 / 100 = 0.2 -> fold
    st.current_bet = 20.0;
    assert_eq!(preflop_decision(&shape("7s 7h"), &st), Decision::fold());
}

#[test]
fn test_small_pair_late_full_table_uses_set_odds() {
    let mut st = state(Position::Late);
    st.num_players = 5;
    st.current_bet = 50.0;
    assert_eq!(preflop_decision(&shape("5s 5h"), &st), Decision::fold());
}

#[test]
fn test_small_pair_without_stack_folds() {
    let mut st = state(Position::Middle);
    st.stack_size = 0.0;
    st.current_bet = 0.0;
    assert_eq!(preflop_decision(&shape("3s 3h"), &st), Decision::fold());
}

#[test]
fn test_ace_king_raises_three_pots_everywhere() {
    for position in ALL_POSITIONS {
        assert_eq!(decide("A\u{2660} K\u{2665}", position), Decision::raise(300.0));
        assert_eq!(decide("K\u{2665} A\u{2660}", position), Decision::raise(300.0));
    }
}

#[test]
fn test_premium_unpaired_variants() {
    assert_eq!(rule("Ks Qh", Position::Early), "premium_unpaired");
    assert_eq!(rule("Qh Ks", Position::Early), "premium_unpaired");
    assert_eq!(rule("As Qs", Position::Early), "premium_unpaired");
    assert_eq!(rule("As Js", Position::Early), "premium_unpaired");
    assert_eq!(rule("As Qh", Position::Early), "premium_unpaired");
    // offsuit AJ is only a strong ace
    assert_eq!(rule("As Jh", Position::Early), "strong_ace");
}

#[test]
fn test_strong_ace() {
    assert_eq!(decide("As Th", Position::Early), Decision::call(20.0));
    assert_eq!(decide("As Th", Position::Middle), Decision::raise(200.0));
    assert_eq!(decide("As 5s", Position::Blind), Decision::raise(200.0));
}

#[test]
fn test_weak_ace_calls_late() {
    assert_eq!(rule("As 5h", Position::Late), "late_ace");
    assert_eq!(decide("As 5h", Position::Late), Decision::call(20.0));
}

#[test]
fn test_weak_ace_falls_through_outside_late() {
    for position in [Position::Early, Position::Middle, Position::Blind] {
        assert_eq!(rule("As 5h", position), "default_fold");
        assert_eq!(decide("As 5h", position), Decision::fold());
    }
}

#[test]
fn test_suited_connectors() {
    assert_eq!(rule("5h 4h", Position::Early), "suited_connector");
    assert_eq!(decide("5h 4h", Position::Late), Decision::call(20.0));
    assert_eq!(decide("5h 4h", Position::Middle), Decision::fold());
    // too low
    assert_eq!(rule("4h 3h", Position::Late), "default_fold");
}

#[test]
fn test_broadway() {
    assert_eq!(rule("Kh Jd", Position::Blind), "broadway");
    assert_eq!(decide("Kh Jd", Position::Late), Decision::call(20.0));
    assert_eq!(decide("Qh Jd", Position::Middle), Decision::fold());
}

#[test]
fn test_late_speculative() {
    assert_eq!(rule("Qh 9h", Position::Late), "late_speculative");
    assert_eq!(decide("Qh 9h", Position::Late), Decision::call(20.0));
    assert_eq!(decide("Qh 9h", Position::Middle), Decision::fold());
}

#[test]
fn test_trash_folds() {
    for position in ALL_POSITIONS {
        assert_eq!(decide("7h 2c", position), Decision::fold());
    }
}

#[test]
fn test_rule_order() {
    let names: Vec<&str> = PREFLOP_RULES.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "premium_pair",
            "medium_pair",
            "small_pair",
            "premium_unpaired",
            "strong_ace",
            "late_ace",
            "suited_connector",
            "broadway",
            "late_speculative",
        ]
    );
}

#[test]
fn test_rules_are_independently_checkable() {
    let s = shape("Jh Th");
    let st = state(Position::Late);
    let matching: Vec<&str> = PREFLOP_RULES
        .iter()
        .filter(|r| (r.matches)(&s, &st))
        .map(|r| r.name)
        .collect();
    assert_eq!(matching, vec!["suited_connector", "late_speculative"]);
}

#[test]
fn test_apply_rules_pairs_rule_with_its_decision() {
    let (rule, decision) = apply_rules(&shape("Ts Th"), &state(Position::Early));
    assert_eq!(rule.name, "medium_pair");
    assert_eq!(decision, Decision::call(20.0));

    let (rule, decision) = apply_rules(&shape("7h 2c"), &state(Position::Late));
    assert_eq!(rule.name, "default_fold");
    assert_eq!(decision, Decision::fold());
}
