use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{dialogue, DialogueTurn, EvaluationResult, TaxonomyLevel},
    services::{
        interpreter::ResponseInterpreter,
        prompt_composer::PromptComposer,
        provider_client::{ChatMessage, CompletionProvider, ProviderError, ProviderRequest},
        retry::{call_with_retry, RetryPolicy},
    },
};

/// Orchestrates one tutoring operation end to end: validate input,
/// compose the prompt, call the provider through the retry controller,
/// interpret the completion. Holds no per-call state; every invocation
/// is independent.
pub struct TutorService {
    provider: Arc<dyn CompletionProvider>,
    composer: PromptComposer,
    interpreter: ResponseInterpreter,
    retry_policy: RetryPolicy,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl TutorService {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: &Config) -> Self {
        Self {
            provider,
            composer: PromptComposer,
            interpreter: ResponseInterpreter::new(),
            retry_policy: RetryPolicy::new(config.retry_max_attempts, config.retry_base_delay),
            model: config.provider_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Opening move: ask the provider for a question about `prompt` at
    /// the given level (Unistructural when the caller names none).
    pub async fn start(&self, prompt: &str, current_level: Option<TaxonomyLevel>) -> AppResult<String> {
        let level = current_level.unwrap_or(TaxonomyLevel::Unistructural);
        let turns = self.composer.start(prompt, level);

        log::info!("starting dialogue at level {}", level);
        let output = self.generate(turns).await?;
        Ok(output.trim().to_string())
    }

    /// Evaluate a student answer against the initial prompt and current
    /// level. Parse degradation is success: missing fields come back as
    /// the named defaults, never as an error.
    pub async fn evaluate(
        &self,
        answer: &str,
        initial_prompt: &str,
        current_level: TaxonomyLevel,
        history: &[DialogueTurn],
    ) -> AppResult<EvaluationResult> {
        dialogue::validate_history(history).map_err(AppError::ValidationError)?;

        let turns = self
            .composer
            .evaluate(answer, initial_prompt, current_level, history);

        log::info!(
            "evaluating answer at level {} with {} history turns",
            current_level,
            history.len()
        );
        let output = self.generate(turns).await?;
        Ok(self.interpreter.interpret(&output, current_level))
    }

    /// Restate a question without changing its meaning.
    pub async fn rephrase(&self, current_question: &str) -> AppResult<String> {
        let turns = self.composer.rephrase(current_question);

        let output = self.generate(turns).await?;
        Ok(output.trim().to_string())
    }

    async fn generate(&self, turns: Vec<ChatMessage>) -> AppResult<String> {
        let request = ProviderRequest {
            model: self.model.clone(),
            messages: turns,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        call_with_retry(self.provider.as_ref(), request, self.retry_policy)
            .await
            .map_err(|err| match err {
                ProviderError::RateLimited(reason) => AppError::RateLimited(reason),
                ProviderError::Upstream(reason) => AppError::GenerationFailed(reason),
            })
    }
}
