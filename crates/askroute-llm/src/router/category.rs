//! Question categories and their prompt table

use crate::router::prompt_templates::{
    PromptTemplate, ACCOUNTING_PROMPT, LEGAL_PROMPT, MEDICAL_PROMPT,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject-matter category of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Legal,
    Accounting,
    Medical,
    /// Catch-all for every label outside the known set
    Other,
}

/// Categories that have an answer template
const ANSWER_TABLE: [(Category, PromptTemplate); 3] = [
    (Category::Legal, LEGAL_PROMPT),
    (Category::Accounting, ACCOUNTING_PROMPT),
    (Category::Medical, MEDICAL_PROMPT),
];

impl Category {
    /// Resolve a classifier label by exact match; anything unknown is `Other`
    pub fn from_label(label: &str) -> Self {
        ANSWER_TABLE
            .iter()
            .map(|(category, _)| *category)
            .find(|category| category.as_str() == label)
            .unwrap_or(Category::Other)
    }

    /// Lower-case label used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Legal => "legal",
            Category::Accounting => "accounting",
            Category::Medical => "medical",
            Category::Other => "other",
        }
    }

    /// Answer template for this category, `None` for `Other`
    pub fn template(&self) -> Option<PromptTemplate> {
        ANSWER_TABLE
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, template)| *template)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
