use serde::Serialize;

use crate::models::domain::{EvaluationResult, TaxonomyLevel};

#[derive(Debug, Clone, Serialize)]
pub struct StartResponse {
    pub question: String,
    pub helper_prompts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    pub feedback: String,
    pub next_question: String,
    pub next_level: TaxonomyLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

impl From<EvaluationResult> for EvaluateResponse {
    fn from(result: EvaluationResult) -> Self {
        EvaluateResponse {
            feedback: result.feedback,
            next_question: result.next_question,
            next_level: result.next_level,
            is_correct: result.is_correct,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RephraseResponse {
    pub rephrased_question: String,
}
