use std::path::Path;

use serde::{Deserialize, Serialize};

use tbscore_audit::events::AuditEvent;
use tbscore_core::models::assessment::ScoreResult;
use tbscore_instruments::config::EngineConfig;
use tbscore_instruments::scoring::Question;
use tbscore_instruments::session::AssessmentSession;
use tbscore_instruments::{get_instrument, Instrument};

/// Flattened catalog as handed to a presentation layer.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub max_score: u32,
    pub questions: Vec<&'a Question>,
}

/// One step of a respondent's answer stream.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerStep {
    pub question_id: String,
    pub value: u32,
}

/// Accepted answer file shapes: an ordered list of steps (later steps
/// overwrite earlier ones) or a plain `{ "question_id": value }` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AnswerFile {
    Steps(Vec<AnswerStep>),
    Map(std::collections::BTreeMap<String, u32>),
}

impl AnswerFile {
    pub fn into_steps(self) -> Vec<AnswerStep> {
        match self {
            AnswerFile::Steps(steps) => steps,
            AnswerFile::Map(map) => map
                .into_iter()
                .map(|(question_id, value)| AnswerStep { question_id, value })
                .collect(),
        }
    }
}

pub fn resolve_instrument(id: &str) -> eyre::Result<&'static dyn Instrument> {
    get_instrument(id).ok_or_else(|| eyre::eyre!("unknown instrument: {id}"))
}

pub fn catalog_json(instrument: &dyn Instrument) -> eyre::Result<String> {
    let view = CatalogView {
        id: instrument.id(),
        name: instrument.name(),
        max_score: instrument.max_score(),
        questions: instrument.flatten(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Record every step in order, then finalize.
pub fn score_steps(
    instrument: &dyn Instrument,
    config: EngineConfig,
    steps: &[AnswerStep],
) -> eyre::Result<ScoreResult> {
    let mut session = AssessmentSession::new(instrument, config);
    for step in steps {
        session.record_answer(&step.question_id, step.value)?;
    }
    let result = session.finalize()?;
    AuditEvent::assessment_finalized(&result, "tbscore-cli").emit();
    Ok(result)
}

pub fn score_file(
    instrument: &dyn Instrument,
    config: EngineConfig,
    answers_path: &Path,
) -> eyre::Result<ScoreResult> {
    let contents = std::fs::read_to_string(answers_path).map_err(|e| {
        eyre::eyre!("failed to read answers at {}: {e}", answers_path.display())
    })?;
    let answers: AnswerFile = serde_json::from_str(&contents)?;
    score_steps(instrument, config, &answers.into_steps())
}

/// Plain-text report of a result for terminal output.
pub fn render_text(result: &ScoreResult) -> String {
    let tier = result.risk_tier;
    let mut out = format!(
        "Score: {}/{} ({:.0}% of maximum)\nRisk: {} ({})\n{}\n",
        result.total_score,
        result.max_possible_score,
        result.score_percentage(),
        tier.label(),
        tier.local_label(),
        tier.summary(),
    );
    if !result.complete {
        out.push_str("Note: not every question was answered; unanswered items scored 0.\n");
    }
    out.push_str("\nRecommendations:\n");
    for line in tier.recommendations() {
        out.push_str(&format!("- {line}\n"));
    }
    out
}
