use once_cell::sync::Lazy;
use serde::Serialize;

use crate::cards::Card;
use crate::config::AdvisorConfig;
use crate::decision::Decision;
use crate::error::AdvisorResult;
use crate::game_state::GameState;
use crate::hand_evaluator::{check_hand_shape, evaluate_hand_with, HandEvaluation};
use crate::postflop::{self, PostflopMetrics};
use crate::preflop::{self, HoleShape};

static DEFAULT_ADVISOR: Lazy<Advisor> = Lazy::new(Advisor::default);

/// Which branch produced a decision and what it saw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "street", rename_all = "lowercase")]
pub enum Route {
    Preflop {
        rule: &'static str,
    },
    Postflop {
        rule: &'static str,
        evaluation: HandEvaluation,
        metrics: PostflopMetrics,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Explanation {
    pub decision: Decision,
    pub route: Route,
}

/// Stateless decision engine. Holds only its configuration, so one instance
/// can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Advisor { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn evaluate(&self, hole_cards: &[Card], community: &[Card]) -> AdvisorResult<HandEvaluation> {
        evaluate_hand_with(hole_cards, community, self.config.ace_low_straight)
    }

    pub fn get_decision(
        &self,
        hole_cards: &[Card],
        community: &[Card],
        state: &GameState,
    ) -> AdvisorResult<Decision> {
        Ok(self.explain(hole_cards, community, state)?.decision)
    }

    /// Routes to the preflop rule tree when the board is empty and to the
    /// postflop heuristic otherwise.
    pub fn explain(
        &self,
        hole_cards: &[Card],
        community: &[Card],
        state: &GameState,
    ) -> AdvisorResult<Explanation> {
        check_hand_shape(hole_cards, community)?;
        state.validate()?;

        if community.is_empty() {
            let shape = HoleShape::new(hole_cards[0], hole_cards[1]);
            let (rule, decision) = preflop::apply_rules(&shape, state);
            log::debug!("preflop {:?} matched {} -> {}", shape, rule.name, decision);
            return Ok(Explanation {
                decision,
                route: Route::Preflop { rule: rule.name },
            });
        }

        let evaluation = self.evaluate(hole_cards, community)?;
        let metrics = PostflopMetrics::compute(evaluation.strength, state, &self.config);
        let (rule, decision) = postflop::apply_rules(&metrics, state);
        log::debug!(
            "postflop {} final strength {:.3} matched {} -> {}",
            evaluation,
            metrics.final_strength,
            rule.name,
            decision
        );
        Ok(Explanation {
            decision,
            route: Route::Postflop {
                rule: rule.name,
                evaluation,
                metrics,
            },
        })
    }
}

/// Decision under the built-in configuration.
pub fn get_decision(
    hole_cards: &[Card],
    community: &[Card],
    state: &GameState,
) -> AdvisorResult<Decision> {
    DEFAULT_ADVISOR.get_decision(hole_cards, community, state)
}
