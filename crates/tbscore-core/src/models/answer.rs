use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A respondent's selection for one question: the chosen option's
/// identity and the points it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub value: u32,
    pub points: u32,
}

/// Recorded answers keyed by question id.
pub type DetailedScores = BTreeMap<String, Answer>;

/// Sum of points over every recorded answer.
pub fn total_points(scores: &DetailedScores) -> u32 {
    scores.values().map(|a| a.points).sum()
}
