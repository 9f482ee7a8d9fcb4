use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::DetailedScores;
use super::risk::{RiskThresholds, RiskTier};

/// The immutable output of a finalized assessment session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub id: Uuid,
    pub instrument_id: String,
    pub total_score: u32,
    pub max_possible_score: u32,
    pub risk_tier: RiskTier,
    /// Threshold pair the tier was classified against.
    pub thresholds: RiskThresholds,
    /// Whether every catalog question had an answer at finalize time.
    /// Unanswered questions contribute zero points.
    pub complete: bool,
    pub detailed_scores: DetailedScores,
    pub assessment_date: jiff::Timestamp,
}

impl ScoreResult {
    /// Total as a percentage of the maximum attainable score.
    pub fn score_percentage(&self) -> f64 {
        if self.max_possible_score == 0 {
            return 0.0;
        }
        f64::from(self.total_score) / f64::from(self.max_possible_score) * 100.0
    }

    pub fn to_json(&self) -> Result<String, crate::error::CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
