pub mod advisor;
pub mod cards;
pub mod cli;
pub mod config;
pub mod decision;
pub mod display;
pub mod error;
pub mod game_state;
pub mod hand_evaluator;
pub mod math_engine;
pub mod play;
pub mod postflop;
pub mod preflop;

pub use advisor::{get_decision, Advisor, Explanation, Route};
pub use cards::{parse_card, Card, Rank, Suit};
pub use config::AdvisorConfig;
pub use decision::{Action, Decision};
pub use error::{AdvisorError, AdvisorResult};
pub use game_state::{GameState, Position};
pub use hand_evaluator::{evaluate_hand, HandCategory, HandEvaluation};
