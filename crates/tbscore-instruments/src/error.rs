use thiserror::Error;
use uuid::Uuid;

use tbscore_core::error::CoreError;

/// Failures raised by the evaluator.
///
/// `UnknownQuestion` and `UnknownOption` mean the caller passed ids or
/// values that were never in the catalog it rendered. Treat them as
/// integration defects, not respondent mistakes.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("unknown option {value} for question '{question_id}'")]
    UnknownOption { question_id: String, value: u32 },

    #[error("assessment incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("assessment session already finalized")]
    SessionFinalized,

    #[error("unknown assessment session: {0}")]
    UnknownSession(Uuid),

    #[error(transparent)]
    Core(#[from] CoreError),
}
