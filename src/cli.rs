use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::advisor::Advisor;
use crate::cards::{all_tokens, parse_board};
use crate::config::AdvisorConfig;
use crate::display::{board_display, evaluation_table, print_decision, print_error, print_section, token_grid};
use crate::error::{AdvisorError, AdvisorResult};
use crate::game_state::{GameState, Position};
use crate::hand_evaluator::classify;

#[derive(Parser)]
#[command(name = "advise", version = "1.0.0", about = "Poker decision helper: fold, call or raise for a hand and table.")]
struct Cli {
    /// JSON file overriding position weights and straight rules
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend an action for a hand
    Decide {
        /// Your two hole cards (e.g., "A♠ K♥", AsKh, "10d,Jd")
        hand: String,
        /// Community cards, 0 to 5 (e.g., "9s Jd Kc")
        #[arg(short, long)]
        board: Option<String>,
        /// Table position: early, middle, late or blind
        #[arg(short, long, default_value = "early")]
        position: Position,
        /// Players at the table (2-9)
        #[arg(short = 'n', long, default_value = "6")]
        players: u8,
        /// Current pot size
        #[arg(long, default_value = "0")]
        pot: f64,
        /// Bet you are facing
        #[arg(long, default_value = "0")]
        bet: f64,
        /// Your remaining stack
        #[arg(long, default_value = "1000")]
        stack: f64,
        /// Show the rule and metrics behind the decision
        #[arg(short, long)]
        explain: bool,
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a set of 2-7 cards
    Evaluate {
        /// Cards (e.g., "A♠ K♠ Q♠ J♠ 10♠")
        cards: String,
    },
    /// List every valid card token
    Cards,
    /// Interactive decision helper
    #[command(alias = "play")]
    Interactive,
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG still wins over -v.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).try_init();
}

fn load_advisor(path: Option<&PathBuf>) -> AdvisorResult<Advisor> {
    let config = match path {
        Some(p) => AdvisorConfig::from_path(p)?,
        None => AdvisorConfig::default(),
    };
    Ok(Advisor::new(config))
}

fn dispatch(cli: Cli) {
    init_logging(cli.verbose);

    let advisor = match load_advisor(cli.config.as_ref()) {
        Ok(a) => a,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    match cli.command {
        Commands::Decide {
            hand,
            board,
            position,
            players,
            pot,
            bet,
            stack,
            explain,
            json,
        } => {
            let state = GameState {
                position,
                num_players: players,
                pot_size: pot,
                current_bet: bet,
                stack_size: stack,
            };
            if let Err(e) = cmd_decide(&advisor, &hand, board.as_deref(), &state, explain, json) {
                print_error(&e.to_string());
            }
        }
        Commands::Evaluate { cards } => {
            if let Err(e) = cmd_evaluate(&advisor, &cards) {
                print_error(&e.to_string());
            }
        }
        Commands::Cards => cmd_cards(),
        Commands::Interactive => crate::play::play_command(&advisor),
    }
}

fn cmd_decide(
    advisor: &Advisor,
    hand: &str,
    board: Option<&str>,
    state: &GameState,
    explain: bool,
    json: bool,
) -> AdvisorResult<()> {
    let hole_cards = parse_board(hand)?;
    if hole_cards.len() != 2 {
        return Err(AdvisorError::InvalidHandSize {
            got: hole_cards.len(),
        });
    }
    let community = match board {
        Some(b) => parse_board(b)?,
        None => Vec::new(),
    };

    let explanation = advisor.explain(&hole_cards, &community, state)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&explanation)?);
        return Ok(());
    }

    println!();
    println!("  Hand:  {}", board_display(&hole_cards));
    println!("  Board: {}", board_display(&community));
    print_decision(&explanation, state, explain);
    Ok(())
}

fn cmd_evaluate(advisor: &Advisor, cards: &str) -> AdvisorResult<()> {
    let cards = parse_board(cards)?;
    if !(2..=7).contains(&cards.len()) {
        return Err(AdvisorError::InvalidValue(format!(
            "need 2 to 7 cards, got {}",
            cards.len()
        )));
    }
    let evaluation = classify(&cards, advisor.config().ace_low_straight);
    println!();
    println!("{}", evaluation_table(&cards, &evaluation));
    println!();
    Ok(())
}

fn cmd_cards() {
    println!();
    println!("{}", token_grid());
    print_section("Tokens", &all_tokens().join(" "));
    println!("\n  {}", "Ranks 2-10, J, Q, K, A; suits \u{2660} \u{2665} \u{2666} \u{2663} or s h d c.".dimmed());
    println!();
}
