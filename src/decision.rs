use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "Fold"),
            Action::Call => write!(f, "Call"),
            Action::Raise => write!(f, "Raise"),
        }
    }
}

/// Recommended action. `amount` is 0 for a fold, the bet faced for a call,
/// and the whole-chip raise target for a raise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    pub amount: f64,
}

impl Decision {
    pub fn fold() -> Self {
        Decision {
            action: Action::Fold,
            amount: 0.0,
        }
    }

    pub fn call(current_bet: f64) -> Self {
        Decision {
            action: Action::Call,
            amount: current_bet,
        }
    }

    pub fn raise(target: f64) -> Self {
        Decision {
            action: Action::Raise,
            amount: target.floor(),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Fold => write!(f, "{}", self.action),
            _ => write!(f, "{} {}", self.action, self.amount),
        }
    }
}
