use crate::constants::prompts::{
    EDUCATOR_PERSONA_PROMPT, EVALUATE_PROMPT_TEMPLATE, REPHRASE_PROMPT_TEMPLATE,
    START_PROMPT_TEMPLATE,
};
use crate::models::domain::{DialogueTurn, Sender, TaxonomyLevel};
use crate::services::provider_client::ChatMessage;

/// Builds the chat turns sent to the completion provider: one system
/// turn with the educator persona and one user turn with the
/// task-specific instruction. Pure string construction.
///
/// The evaluate template embeds the `Feedback:` / `Next Question:` /
/// `Next Level:` / `Correct:` labels literally; the response interpreter
/// matches on exactly those labels, so the two must stay in lockstep.
pub struct PromptComposer;

impl PromptComposer {
    pub fn start(&self, prompt: &str, level: TaxonomyLevel) -> Vec<ChatMessage> {
        let instruction = START_PROMPT_TEMPLATE
            .replace("{level}", level.as_str())
            .replace("{prompt}", prompt);

        vec![
            ChatMessage::system(EDUCATOR_PERSONA_PROMPT),
            ChatMessage::user(instruction),
        ]
    }

    pub fn evaluate(
        &self,
        answer: &str,
        initial_prompt: &str,
        level: TaxonomyLevel,
        history: &[DialogueTurn],
    ) -> Vec<ChatMessage> {
        let mut instruction = EVALUATE_PROMPT_TEMPLATE
            .replace("{initial_prompt}", initial_prompt)
            .replace("{level}", level.as_str())
            .replace("{answer}", answer);

        if !history.is_empty() {
            instruction.push_str("\n\nConversation so far:\n");
            instruction.push_str(&Self::transcript(history));
        }

        vec![
            ChatMessage::system(EDUCATOR_PERSONA_PROMPT),
            ChatMessage::user(instruction),
        ]
    }

    pub fn rephrase(&self, question: &str) -> Vec<ChatMessage> {
        let instruction = REPHRASE_PROMPT_TEMPLATE.replace("{question}", question);

        vec![
            ChatMessage::system(EDUCATOR_PERSONA_PROMPT),
            ChatMessage::user(instruction),
        ]
    }

    fn transcript(history: &[DialogueTurn]) -> String {
        history
            .iter()
            .map(|turn| {
                let who = match turn.sender {
                    Sender::Student => "Student",
                    Sender::Educator => "Educator",
                };
                format!("{}: {}", who, turn.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
