use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tbscore_core::error::CoreError;
use tbscore_core::models::risk::RiskThresholds;

/// Evaluator settings shared by every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EngineConfig {
    #[serde(default)]
    pub thresholds: RiskThresholds,
    /// Allow `finalize` before every question is answered. Unanswered
    /// questions then contribute zero points.
    #[serde(default = "default_allow_incomplete")]
    pub allow_incomplete_finalize: bool,
}

fn default_allow_incomplete() -> bool {
    true
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.thresholds.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: RiskThresholds::IDAI,
            allow_incomplete_finalize: default_allow_incomplete(),
        }
    }
}
