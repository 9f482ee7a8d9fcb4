use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Risk classification assigned from an assessment's raw point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    /// Indonesian label used on IDAI score sheets.
    pub fn local_label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Rendah",
            RiskTier::Moderate => "Sedang",
            RiskTier::High => "Tinggi",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low TB risk. Continue routine monitoring and preventive measures.",
            RiskTier::Moderate => {
                "Moderate TB risk. Close monitoring and additional evaluation may be needed."
            }
            RiskTier::High => {
                "High TB risk detected. Immediate clinical evaluation recommended."
            }
        }
    }

    /// Static follow-up actions shown alongside the tier.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskTier::Low => &[
                "Continue routine monitoring",
                "Provide preventive education",
                "Schedule regular follow-ups",
                "Monitor for symptom development",
            ],
            RiskTier::Moderate => &[
                "Consider additional investigations",
                "Close monitoring required",
                "Evaluate for latent TB infection",
                "Consider preventive therapy",
                "Weekly follow-up recommended",
            ],
            RiskTier::High => &[
                "Urgent clinical evaluation required",
                "Consider active TB treatment",
                "Isolation precautions if indicated",
                "Comprehensive diagnostic workup",
                "Immediate specialist referral",
            ],
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds (inclusive) of the Moderate and High tiers.
///
/// Classification is on the absolute point total; the catalog's maximum
/// score plays no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskThresholds {
    pub high_threshold: u32,
    pub moderate_threshold: u32,
}

impl RiskThresholds {
    /// IDAI absolute thresholds: `>= 6` High, `4..=5` Moderate, `< 4` Low.
    pub const IDAI: RiskThresholds = RiskThresholds {
        high_threshold: 6,
        moderate_threshold: 4,
    };

    /// Relative phrasing: `<= 3` Low, `4..=6` Moderate, `> 6` High.
    pub const RELATIVE: RiskThresholds = RiskThresholds {
        high_threshold: 7,
        moderate_threshold: 4,
    };

    pub fn new(high_threshold: u32, moderate_threshold: u32) -> Result<Self, CoreError> {
        let thresholds = Self {
            high_threshold,
            moderate_threshold,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Reject pairs where the Moderate band would start above the High band.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.moderate_threshold > self.high_threshold {
            return Err(CoreError::InvalidThresholds {
                moderate: self.moderate_threshold,
                high: self.high_threshold,
            });
        }
        Ok(())
    }

    pub fn classify(&self, total_score: u32) -> RiskTier {
        if total_score >= self.high_threshold {
            RiskTier::High
        } else if total_score >= self.moderate_threshold {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::IDAI
    }
}
