use serde::{Deserialize, Serialize};

use crate::models::domain::taxonomy::TaxonomyLevel;

/// Structured outcome of evaluating a student answer. Constructed fresh
/// per call and handed straight back to the caller; never persisted here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluationResult {
    pub feedback: String,
    pub next_question: String,
    pub next_level: TaxonomyLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}
