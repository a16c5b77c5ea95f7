use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};
use crate::game_state::Position;

static DEFAULT_CONFIG_JSON: &str = include_str!("../data/advisor.json");

// The bundled file must name every field: the field defaults below read back
// from this static.
static DEFAULT_CONFIG: Lazy<AdvisorConfig> = Lazy::new(|| {
    serde_json::from_str(DEFAULT_CONFIG_JSON).expect("Failed to parse bundled advisor config")
});

fn default_position_weights() -> BTreeMap<Position, f64> {
    DEFAULT_CONFIG.position_weights.clone()
}

fn default_fallback_weight() -> f64 {
    DEFAULT_CONFIG.fallback_weight
}

fn default_ace_low_straight() -> bool {
    DEFAULT_CONFIG.ace_low_straight
}

/// Tunables for the advisor. Immutable once built; pass a different one to
/// reweight positions. Fields missing from a user file keep the bundled
/// `data/advisor.json` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Postflop strength multiplier per seat.
    #[serde(default = "default_position_weights")]
    pub position_weights: BTreeMap<Position, f64>,
    /// Multiplier for a position missing from `position_weights`.
    #[serde(default = "default_fallback_weight")]
    pub fallback_weight: f64,
    /// Count A-2-3-4-5 as a straight.
    #[serde(default = "default_ace_low_straight")]
    pub ace_low_straight: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl AdvisorConfig {
    pub fn from_json(json: &str) -> AdvisorResult<Self> {
        let config: AdvisorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> AdvisorResult<Self> {
        log::info!("loading advisor config from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| AdvisorError::Config {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("{:?}", config);
        Ok(config)
    }

    pub fn with_position_weight(mut self, position: Position, weight: f64) -> Self {
        self.position_weights.insert(position, weight);
        self
    }

    pub fn position_multiplier(&self, position: Position) -> f64 {
        self.position_weights
            .get(&position)
            .copied()
            .unwrap_or(self.fallback_weight)
    }

    pub fn validate(&self) -> AdvisorResult<()> {
        let weights = self
            .position_weights
            .iter()
            .map(|(p, w)| (p.as_str(), *w))
            .chain(std::iter::once(("fallback", self.fallback_weight)));
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AdvisorError::InvalidValue(format!(
                    "weight for {} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}
