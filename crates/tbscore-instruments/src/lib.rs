//! tbscore-instruments
//!
//! Scoring instrument definitions and the evaluator that runs them.
//! Catalogs are static data built once per process; sessions hold one
//! respondent's answers and produce a [`ScoreResult`].
//!
//! [`ScoreResult`]: tbscore_core::models::assessment::ScoreResult

pub mod catalog;
pub mod config;
pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;
pub mod store;

use std::collections::HashSet;

use scoring::{Category, Question};

/// Trait implemented by each scoring questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "idai_tb").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Categories in presentation order.
    fn categories(&self) -> &[Category];

    /// Every question, categories in declaration order and questions in
    /// declaration order within each category.
    fn flatten(&self) -> Vec<&Question> {
        self.categories()
            .iter()
            .flat_map(|c| &c.questions)
            .collect()
    }

    /// Sum over all questions of the highest option points.
    fn max_score(&self) -> u32 {
        self.categories()
            .iter()
            .flat_map(|c| &c.questions)
            .map(Question::max_points)
            .sum()
    }

    fn question(&self, id: &str) -> Option<&Question> {
        self.categories()
            .iter()
            .flat_map(|c| &c.questions)
            .find(|q| q.id == id)
    }

    fn question_count(&self) -> usize {
        self.categories().iter().map(|c| c.questions.len()).sum()
    }

    /// Structural defects in the catalog: duplicate question ids, questions
    /// without options, duplicate option values, stale category labels.
    /// Empty for a well-formed catalog.
    fn catalog_defects(&self) -> Vec<String> {
        let mut defects = Vec::new();
        let mut seen_ids = HashSet::new();

        for category in self.categories() {
            for question in &category.questions {
                if !seen_ids.insert(question.id.as_str()) {
                    defects.push(format!(
                        "{}: duplicate question id '{}'",
                        self.name(),
                        question.id
                    ));
                }
                if question.options.is_empty() {
                    defects.push(format!(
                        "{}: question '{}' has no options",
                        self.name(),
                        question.id
                    ));
                }
                let mut seen_values = HashSet::new();
                for option in &question.options {
                    if !seen_values.insert(option.value) {
                        defects.push(format!(
                            "{}: question '{}' repeats option value {}",
                            self.name(),
                            question.id,
                            option.value
                        ));
                    }
                }
                if question.category != category.name {
                    defects.push(format!(
                        "{}: question '{}' labelled '{}' but declared under '{}'",
                        self.name(),
                        question.id,
                        question.category,
                        category.name
                    ));
                }
            }
        }
        defects
    }
}

static INSTRUMENTS: [&dyn Instrument; 1] = [&instruments::idai::IdaiTb];

/// Return all registered instruments.
pub fn all_instruments() -> &'static [&'static dyn Instrument] {
    &INSTRUMENTS
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<&'static dyn Instrument> {
    all_instruments().iter().copied().find(|i| i.id() == id)
}

/// The instrument used when none is named.
pub fn default_instrument() -> &'static dyn Instrument {
    &instruments::idai::IdaiTb
}
