use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::advisor::{Explanation, Route};
use crate::cards::{Card, Suit, ALL_RANKS, ALL_SUITS};
use crate::decision::{Action, Decision};
use crate::game_state::GameState;
use crate::hand_evaluator::HandEvaluation;
use crate::math_engine::SprZone;

pub fn board_display(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".dimmed().to_string();
    }
    cards
        .iter()
        .map(|card| {
            let text = card.to_string();
            match card.suit {
                Suit::Spades => text.white().to_string(),
                Suit::Hearts => text.red().to_string(),
                Suit::Diamonds => text.blue().to_string(),
                Suit::Clubs => text.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn styled_action(action: Action) -> String {
    let label = action.to_string().to_uppercase();
    match action {
        Action::Raise => label.red().bold().to_string(),
        Action::Call => label.green().bold().to_string(),
        Action::Fold => label.dimmed().bold().to_string(),
    }
}

pub fn decision_line(decision: &Decision) -> String {
    match decision.action {
        Action::Fold => styled_action(decision.action),
        _ => format!("{}  ${:.0}", styled_action(decision.action), decision.amount),
    }
}

pub fn strength_bar(strength: f64, width: usize) -> String {
    let filled = ((strength.clamp(0.0, 1.0)) * width as f64) as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.0}%", strength * 100.0);

    if strength >= 0.75 {
        format!("{} {}", bar.green(), pct)
    } else if strength >= 0.5 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn evaluation_table(cards: &[Card], evaluation: &HandEvaluation) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new(""), Cell::new("")]);
    table.add_row(vec![
        Cell::new("Cards".bold().to_string()),
        Cell::new(board_display(cards)),
    ]);
    table.add_row(vec![
        Cell::new("Category".bold().to_string()),
        Cell::new(evaluation.category.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Strength".bold().to_string()),
        Cell::new(strength_bar(evaluation.strength, 20)),
    ]);
    table.to_string()
}

pub fn explanation_table(explanation: &Explanation, state: &GameState) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric").set_alignment(CellAlignment::Left),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);

    table.add_row(vec![Cell::new("Position"), Cell::new(state.position.to_string())]);
    table.add_row(vec![Cell::new("Players"), Cell::new(state.num_players)]);
    table.add_row(vec![Cell::new("Pot"), Cell::new(format!("${:.0}", state.pot_size))]);
    table.add_row(vec![Cell::new("To Call"), Cell::new(format!("${:.0}", state.current_bet))]);
    table.add_row(vec![Cell::new("Stack"), Cell::new(format!("${:.0}", state.stack_size))]);

    match &explanation.route {
        Route::Preflop { rule } => {
            table.add_row(vec![Cell::new("Street"), Cell::new("preflop")]);
            table.add_row(vec![Cell::new("Rule"), Cell::new(rule)]);
        }
        Route::Postflop {
            rule,
            evaluation,
            metrics,
        } => {
            let zone = SprZone::of(metrics.spr);
            table.add_row(vec![Cell::new("Street"), Cell::new("postflop")]);
            table.add_row(vec![Cell::new("Hand"), Cell::new(evaluation.to_string())]);
            table.add_row(vec![
                Cell::new("Position Weight"),
                Cell::new(format!("x{:.2}", metrics.position_multiplier)),
            ]);
            table.add_row(vec![
                Cell::new("Player Adjustment"),
                Cell::new(format!("x{:.2}", metrics.player_adjustment)),
            ]);
            table.add_row(vec![
                Cell::new("Final Strength".bold().to_string()),
                Cell::new(strength_bar(metrics.final_strength, 20)),
            ]);
            table.add_row(vec![
                Cell::new("Pot Odds"),
                Cell::new(format!("{:.1}%", metrics.pot_odds * 100.0)),
            ]);
            table.add_row(vec![
                Cell::new("SPR"),
                Cell::new(format!("{:.1} ({})", metrics.spr, zone)),
            ]);
            table.add_row(vec![Cell::new("Rule"), Cell::new(rule)]);
        }
    }

    table.to_string()
}

/// 13 x 4 grid of every selectable card token.
pub fn token_grid() -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec![Cell::new("")];
    for suit in ALL_SUITS {
        header.push(Cell::new(suit.symbol()).set_alignment(CellAlignment::Center));
    }
    table.set_header(header);

    for rank in ALL_RANKS.iter().rev() {
        let mut row = vec![Cell::new(rank.symbol().bold().to_string())];
        for suit in ALL_SUITS {
            let card = Card::new(*rank, suit);
            row.push(Cell::new(board_display(&[card])).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }
    table.to_string()
}

pub fn print_decision(explanation: &Explanation, state: &GameState, verbose: bool) {
    println!();
    println!("  {}", decision_line(&explanation.decision));
    if let Route::Postflop { metrics, .. } = &explanation.route {
        println!("  {}", SprZone::of(metrics.spr).guidance().dimmed());
    }
    if verbose {
        println!();
        println!("{}", explanation_table(explanation, state));
    }
    println!();
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("  {}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
