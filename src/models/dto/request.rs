use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{DialogueTurn, TaxonomyLevel};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartRequest {
    #[validate(length(min = 1, max = 10000))]
    pub prompt: String,

    pub current_level: Option<TaxonomyLevel>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluateRequest {
    #[validate(length(min = 1, max = 10000))]
    pub answer: String,

    #[validate(length(min = 1, max = 10000))]
    pub initial_prompt: String,

    pub current_level: TaxonomyLevel,

    #[serde(default)]
    pub history: Vec<DialogueTurn>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RephraseRequest {
    #[validate(length(min = 1, max = 10000))]
    pub current_question: String,
}
