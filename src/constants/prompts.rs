//! Prompt templates and the field labels shared with the response
//! interpreter. The labels below must appear verbatim in the evaluation
//! template — the interpreter matches on them to recover structure from
//! the model's free-text reply.

pub const EDUCATOR_PERSONA_PROMPT: &str = "You are an expert Socratic educator. You guide learners by asking one probing question at a time, pitched at a stated level of the SOLO taxonomy (Prestructural, Unistructural, Multistructural, Relational, Extended Abstract). You never lecture; you question, give concise constructive feedback, and raise or hold the level based on the quality of the learner's answer.";

/// Labels the evaluation template asks the model to emit and the
/// interpreter matches on. Matching is case-insensitive.
pub const FEEDBACK_LABEL: &str = "Feedback:";
pub const NEXT_QUESTION_LABEL: &str = "Next Question:";
pub const NEXT_LEVEL_LABEL: &str = "Next Level:";
pub const CORRECT_LABEL: &str = "Correct:";

/// Fallback values when the model omits a labeled field.
pub const DEFAULT_FEEDBACK: &str = "No feedback provided.";
pub const DEFAULT_NEXT_QUESTION: &str = "No next question provided.";

/// Keywords that count as an affirmation when no explicit `Correct:`
/// marker is present. Deliberately loose: the model phrases approval in
/// free text, so this is a heuristic, not a contract.
pub const AFFIRMING_KEYWORDS: &[&str] = &["correct", "satisfactory", "proficient"];

/// Fixed hints returned alongside the opening question.
pub const HELPER_PROMPTS: &[&str] = &[
    "Think critically",
    "Provide examples",
    "Use logical reasoning",
];

pub const START_PROMPT_TEMPLATE: &str = "Generate a single open question at the {level} level of the SOLO taxonomy that starts a Socratic dialogue about the following topic. Reply with the question only.

Topic: {prompt}";

pub const EVALUATE_PROMPT_TEMPLATE: &str = "Acting as an expert, evaluate this response based on the SOLO taxonomy.

Question Context: {initial_prompt}
Current Level: {level}
Student's Answer: {answer}

Reply using exactly this format:
Feedback: <constructive feedback on the answer>
Next Question: <the next question to ask>
Next Level: <one of: Prestructural, Unistructural, Multistructural, Relational, Extended Abstract>
Correct: <true or false>";

pub const REPHRASE_PROMPT_TEMPLATE: &str = "Rephrase the following question without changing its meaning or difficulty. Reply with the rephrased question only.

Question: {question}";
