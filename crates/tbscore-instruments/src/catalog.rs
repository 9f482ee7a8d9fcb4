use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::Category;
use crate::Instrument;

/// An instrument defined by data rather than a dedicated type.
///
/// Useful for alternate question sets and for tests. Category labels on
/// questions are normalized on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(id: &str, name: &str, categories: Vec<Category>) -> Self {
        let categories = categories
            .into_iter()
            .map(|c| Category::new(&c.name, c.questions))
            .collect();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            categories,
        }
    }

    /// Parse a catalog from JSON, normalizing category labels.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Catalog = serde_json::from_str(json)?;
        Ok(Self::new(&raw.id, &raw.name, raw.categories))
    }
}

impl Instrument for Catalog {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}
