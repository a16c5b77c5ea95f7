use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::advisor::Advisor;
use crate::cards::{parse_board, parse_card, Card};
use crate::display::{board_display, decision_line, explanation_table};
use crate::game_state::{GameState, Position, ALL_POSITIONS, MAX_PLAYERS, MIN_PLAYERS};

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

struct QuitSession;

fn prompt(message: &str, default: Option<&str>, reader: &mut dyn BufRead, writer: &mut dyn Write) -> String {
    if let Some(d) = default {
        write!(writer, "{} [{}]: ", message, d).ok();
    } else {
        write!(writer, "{}: ", message).ok();
    }
    writer.flush().ok();

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => "q".to_string(),
        Ok(_) => {
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() {
                default.unwrap_or("").to_string()
            } else {
                trimmed
            }
        }
        Err(_) => "q".to_string(),
    }
}

fn prompt_or_quit(
    message: &str,
    default: Option<&str>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<String, QuitSession> {
    let answer = prompt(message, default, reader, writer);
    if answer.eq_ignore_ascii_case("q") {
        return Err(QuitSession);
    }
    Ok(answer)
}

fn prompt_position(reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<Position, QuitSession> {
    writeln!(writer, "\n  {}", "Position".bold()).ok();
    for (i, pos) in ALL_POSITIONS.iter().enumerate() {
        let marker = if i == 0 { " <" } else { "" };
        writeln!(writer, "    {}  {}{}", format!("{}.", i + 1).bold(), pos, marker.dimmed()).ok();
    }
    loop {
        let answer = prompt_or_quit("  Enter a number", Some("1"), reader, writer)?;
        if let Ok(n) = answer.parse::<usize>() {
            if (1..=ALL_POSITIONS.len()).contains(&n) {
                return Ok(ALL_POSITIONS[n - 1]);
            }
        }
        let lower = answer.to_lowercase();
        if let Some(position) = ALL_POSITIONS
            .iter()
            .copied()
            .find(|p| !lower.is_empty() && p.as_str().starts_with(&lower))
        {
            return Ok(position);
        }
        writeln!(writer, "  {}", format!("'{}' is not a position", answer).red()).ok();
    }
}

fn prompt_number(
    message: &str,
    default: &str,
    valid: impl Fn(f64) -> bool,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<f64, QuitSession> {
    loop {
        let answer = prompt_or_quit(message, Some(default), reader, writer)?;
        match answer.parse::<f64>() {
            Ok(v) if valid(v) => return Ok(v),
            _ => {
                writeln!(writer, "  {}", format!("'{}' is not a valid amount", answer).red()).ok();
            }
        }
    }
}

fn prompt_yn(message: &str, default: &str, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Option<bool> {
    let answer = prompt(&format!("{} (y/n)", message), Some(default), reader, writer);
    if answer.eq_ignore_ascii_case("q") {
        return None;
    }
    Some(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Reads one hole-card slot. A blank answer leaves the slot empty.
fn prompt_card(
    message: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<Option<Card>, QuitSession> {
    loop {
        let answer = prompt_or_quit(message, None, reader, writer)?;
        match parse_card(&answer) {
            Ok(card) => return Ok(card),
            Err(e) => {
                writeln!(writer, "  {}", e.to_string().red()).ok();
            }
        }
    }
}

fn prompt_board(reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<Vec<Card>, QuitSession> {
    loop {
        let answer = prompt_or_quit("  Community cards (blank for preflop)", None, reader, writer)?;
        match parse_board(&answer) {
            Ok(cards) if cards.len() <= 5 => return Ok(cards),
            Ok(cards) => {
                writeln!(writer, "  {}", format!("At most 5 community cards, got {}", cards.len()).red()).ok();
            }
            Err(e) => {
                writeln!(writer, "  {}", e.to_string().red()).ok();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

pub fn play_command(advisor: &Advisor) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    run_interactive_session(advisor, &mut reader, &mut writer);
}

pub fn run_interactive_session(advisor: &Advisor, reader: &mut dyn BufRead, writer: &mut dyn Write) {
    writeln!(writer).ok();
    writeln!(writer, "{}", "Poker Decision Helper".cyan().bold()).ok();
    writeln!(writer, "Type {} at any prompt to quit. Cards look like A\u{2660}, 10h or Td.\n", "'q'".bold()).ok();

    loop {
        if play_one_hand(advisor, reader, writer).is_err() {
            break;
        }
        match prompt_yn("\nAnother hand?", "y", reader, writer) {
            Some(true) => continue,
            _ => break,
        }
    }
    writeln!(writer, "\n{}\n", "Good luck at the tables.".cyan().bold()).ok();
}

fn play_one_hand(advisor: &Advisor, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<(), QuitSession> {
    let mut hole_cards = Vec::with_capacity(2);
    for slot in 1..=2 {
        if let Some(card) = prompt_card(&format!("  Hole card {}", slot), reader, writer)? {
            hole_cards.push(card);
        }
    }
    let community = prompt_board(reader, writer)?;
    let position = prompt_position(reader, writer)?;

    let valid_players = |v: f64| v.fract() == 0.0 && (f64::from(MIN_PLAYERS)..=f64::from(MAX_PLAYERS)).contains(&v);
    let non_negative = |v: f64| v.is_finite() && v >= 0.0;
    let num_players = prompt_number("  Players", "6", valid_players, reader, writer)? as u8;
    let pot_size = prompt_number("  Pot size", "0", non_negative, reader, writer)?;
    let current_bet = prompt_number("  Current bet", "0", non_negative, reader, writer)?;
    let stack_size = prompt_number("  Stack size", "1000", non_negative, reader, writer)?;

    // The advisor only runs with both hole cards selected.
    if hole_cards.len() != 2 {
        writeln!(writer, "\n  {}", "Please select both hole cards".yellow().bold()).ok();
        return Ok(());
    }

    let state = GameState {
        position,
        num_players,
        pot_size,
        current_bet,
        stack_size,
    };

    writeln!(writer).ok();
    writeln!(writer, "  Hand:  {}", board_display(&hole_cards)).ok();
    writeln!(writer, "  Board: {}", board_display(&community)).ok();

    match advisor.explain(&hole_cards, &community, &state) {
        Ok(explanation) => {
            writeln!(writer, "\n  Decision: {}", decision_line(&explanation.decision)).ok();
            writeln!(writer, "{}", explanation_table(&explanation, &state)).ok();
        }
        Err(e) => {
            writeln!(writer, "  {}", e.to_string().red()).ok();
        }
    }
    Ok(())
}
