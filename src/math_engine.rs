use std::fmt;

/// Share of the final pot the caller contributes. Zero when nothing is at stake.
pub fn pot_odds(pot: f64, bet: f64) -> f64 {
    let total = pot + bet;
    if total <= 0.0 {
        return 0.0;
    }
    bet / total
}

/// Stack-to-pot ratio. An empty pot is treated as 1 chip.
pub fn stack_to_pot(stack: f64, pot: f64) -> f64 {
    let pot = if pot > 0.0 { pot } else { 1.0 };
    stack / pot
}

/// Cost of the call relative to a tenth of the stack, used to price set mining.
pub fn set_odds(bet: f64, stack: f64) -> f64 {
    bet / (stack * 0.1)
}

/// Shrinks hand value as the table fills up, floored at 0.6.
pub fn player_adjustment(num_players: u8) -> f64 {
    (1.0 - f64::from(num_players) * 0.05).max(0.6)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprZone {
    Low,
    Medium,
    High,
}

impl fmt::Display for SprZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SprZone::Low => write!(f, "low"),
            SprZone::Medium => write!(f, "medium"),
            SprZone::High => write!(f, "high"),
        }
    }
}

impl SprZone {
    pub fn of(ratio: f64) -> SprZone {
        if ratio <= 4.0 {
            SprZone::Low
        } else if ratio <= 10.0 {
            SprZone::Medium
        } else {
            SprZone::High
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            SprZone::Low => "Commit with top pair+. All-in pressure is standard.",
            SprZone::Medium => "Two pair+ for stacking. One pair hands play cautiously.",
            SprZone::High => "Need very strong hands to stack off. Implied odds matter most.",
        }
    }
}
