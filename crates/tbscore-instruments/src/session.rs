use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use tbscore_core::models::answer::{total_points, Answer, DetailedScores};
use tbscore_core::models::assessment::ScoreResult;

use crate::config::EngineConfig;
use crate::error::ScoringError;
use crate::scoring::Question;
use crate::Instrument;

/// Lifecycle of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    Empty,
    InProgress,
    Complete,
    Finalized,
}

/// One respondent's run through an instrument.
///
/// Answers may be changed freely until [`finalize`](Self::finalize)
/// succeeds. After that the session rejects every mutation; start a new
/// session for the next assessment.
pub struct AssessmentSession<'a> {
    instrument: &'a dyn Instrument,
    config: EngineConfig,
    answers: DetailedScores,
    finalized: bool,
}

impl<'a> AssessmentSession<'a> {
    pub fn new(instrument: &'a dyn Instrument, config: EngineConfig) -> Self {
        Self {
            instrument,
            config,
            answers: DetailedScores::new(),
            finalized: false,
        }
    }

    pub fn instrument(&self) -> &'a dyn Instrument {
        self.instrument
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Record the option with `value` for `question_id`, replacing any
    /// earlier answer to that question.
    pub fn record_answer(&mut self, question_id: &str, value: u32) -> Result<Answer, ScoringError> {
        if self.finalized {
            return Err(ScoringError::SessionFinalized);
        }

        let question = self
            .instrument
            .question(question_id)
            .ok_or_else(|| ScoringError::UnknownQuestion(question_id.to_string()))?;
        let option = question
            .option(value)
            .ok_or_else(|| ScoringError::UnknownOption {
                question_id: question_id.to_string(),
                value,
            })?;

        let answer = Answer {
            value: option.value,
            points: option.points,
        };
        let previous = self.answers.insert(question.id.clone(), answer);
        debug!(
            question_id,
            value,
            points = answer.points,
            replaced = previous.is_some(),
            "answer recorded"
        );
        Ok(answer)
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn answers(&self) -> &DetailedScores {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn question_count(&self) -> usize {
        self.instrument.question_count()
    }

    /// True once every catalog question has an answer.
    pub fn is_complete(&self) -> bool {
        self.instrument
            .flatten()
            .iter()
            .all(|q| self.answers.contains_key(&q.id))
    }

    /// Fraction of questions answered, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = self.question_count();
        if total == 0 {
            return 1.0;
        }
        self.answered_count() as f64 / total as f64
    }

    /// First question in presentation order that has no answer yet.
    pub fn next_unanswered(&self) -> Option<&'a Question> {
        self.instrument
            .flatten()
            .into_iter()
            .find(|q| !self.answers.contains_key(&q.id))
    }

    pub fn state(&self) -> SessionState {
        if self.finalized {
            SessionState::Finalized
        } else if self.is_complete() {
            SessionState::Complete
        } else if self.answers.is_empty() {
            SessionState::Empty
        } else {
            SessionState::InProgress
        }
    }

    /// Score the recorded answers and close the session.
    ///
    /// Unanswered questions contribute zero. Finalizing an incomplete
    /// session fails with [`ScoringError::Incomplete`] unless
    /// `allow_incomplete_finalize` is set; the session stays open in that
    /// case.
    pub fn finalize(&mut self) -> Result<ScoreResult, ScoringError> {
        if self.finalized {
            return Err(ScoringError::SessionFinalized);
        }
        self.config.validate()?;

        let complete = self.is_complete();
        if !complete {
            let answered = self.answered_count();
            let total = self.question_count();
            if !self.config.allow_incomplete_finalize {
                return Err(ScoringError::Incomplete { answered, total });
            }
            warn!(
                instrument = self.instrument.id(),
                answered, total, "finalizing incomplete assessment"
            );
        }

        let total_score = total_points(&self.answers);
        let max_possible_score = self.instrument.max_score();
        let risk_tier = self.config.thresholds.classify(total_score);

        let result = ScoreResult {
            id: Uuid::new_v4(),
            instrument_id: self.instrument.id().to_string(),
            total_score,
            max_possible_score,
            risk_tier,
            thresholds: self.config.thresholds,
            complete,
            detailed_scores: self.answers.clone(),
            assessment_date: jiff::Timestamp::now(),
        };
        self.finalized = true;

        info!(
            result_id = %result.id,
            instrument = %result.instrument_id,
            total_score,
            max_possible_score,
            risk_tier = %risk_tier,
            "assessment finalized"
        );
        Ok(result)
    }
}
