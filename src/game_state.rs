use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Early,
    Middle,
    Late,
    Blind,
}

pub const ALL_POSITIONS: [Position; 4] = [
    Position::Early,
    Position::Middle,
    Position::Late,
    Position::Blind,
];

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Early => "early",
            Position::Middle => "middle",
            Position::Late => "late",
            Position::Blind => "blind",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(Position::Early),
            "middle" => Ok(Position::Middle),
            "late" => Ok(Position::Late),
            "blind" => Ok(Position::Blind),
            other => Err(AdvisorError::InvalidValue(format!(
                "unknown position '{}' (expected early, middle, late or blind)",
                other
            ))),
        }
    }
}

/// Table situation supplied with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub position: Position,
    pub num_players: u8,
    pub pot_size: f64,
    pub current_bet: f64,
    pub stack_size: f64,
}

impl GameState {
    pub fn new(
        position: Position,
        num_players: u8,
        pot_size: f64,
        current_bet: f64,
        stack_size: f64,
    ) -> AdvisorResult<Self> {
        let state = GameState {
            position,
            num_players,
            pot_size,
            current_bet,
            stack_size,
        };
        state.validate()?;
        Ok(state)
    }

    pub fn validate(&self) -> AdvisorResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(AdvisorError::InvalidValue(format!(
                "player count must be {}-{}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.num_players
            )));
        }
        for (name, amount) in [
            ("pot size", self.pot_size),
            ("current bet", self.current_bet),
            ("stack size", self.stack_size),
        ] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(AdvisorError::InvalidValue(format!(
                    "{} must be a non-negative number, got {}",
                    name, amount
                )));
            }
        }
        Ok(())
    }
}
