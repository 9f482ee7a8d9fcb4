use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One graded choice of a question.
///
/// `value` identifies the choice within its question; `label` is display
/// text the engine never interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
    pub points: u32,
}

impl AnswerOption {
    pub fn new(value: u32, label: &str, points: u32) -> Self {
        Self {
            value,
            label: label.to_string(),
            points,
        }
    }
}

/// A scoring question with mutually exclusive options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    /// Label of the owning category, copied for display.
    #[serde(default)]
    pub category: String,
}

impl Question {
    /// Build a question; the category label is filled in by [`Category::new`].
    pub fn new(id: &str, prompt: &str, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options,
            category: String::new(),
        }
    }

    pub fn option(&self, value: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Highest points among the options. Option order does not matter.
    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }
}

/// A named, ordered group of questions. Carries no scoring weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(name: &str, questions: Vec<Question>) -> Self {
        let questions = questions
            .into_iter()
            .map(|q| Question {
                category: name.to_string(),
                ..q
            })
            .collect();
        Self {
            name: name.to_string(),
            questions,
        }
    }
}
