use serde::Serialize;
use tracing::info;

use tbscore_core::models::assessment::ScoreResult;

/// A structured audit event for an assessment action.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    /// Event recording a finalized score, with the score summary attached.
    /// Per-question answers are left out.
    pub fn assessment_finalized(result: &ScoreResult, actor: impl Into<String>) -> Self {
        Self::new("finalize", "assessment", result.id.to_string(), actor).with_details(
            serde_json::json!({
                "instrument_id": result.instrument_id,
                "total_score": result.total_score,
                "max_possible_score": result.max_possible_score,
                "risk_tier": result.risk_tier,
                "complete": result.complete,
                "assessment_date": result.assessment_date.to_string(),
            }),
        )
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.actor = %self.actor,
            audit.details = %details,
            "audit event"
        );
    }
}
