use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::prompts::{
    AFFIRMING_KEYWORDS, CORRECT_LABEL, DEFAULT_FEEDBACK, DEFAULT_NEXT_QUESTION, FEEDBACK_LABEL,
    NEXT_LEVEL_LABEL, NEXT_QUESTION_LABEL,
};
use crate::models::domain::{EvaluationResult, TaxonomyLevel};

/// Raw field values recovered from a provider completion, before
/// defaults and taxonomy validation are applied. `None` means the
/// corresponding marker was absent.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub feedback: Option<String>,
    pub next_question: Option<String>,
    pub next_level: Option<String>,
    pub correct: Option<bool>,
}

/// Strategy for recovering structured fields from free model text.
/// Regex label matching is the default; a JSON-output extractor can be
/// swapped in without touching the interpreter's call sites.
pub trait FieldExtractor: Send + Sync {
    fn extract(&self, text: &str) -> ExtractedFields;
}

// Each value runs non-greedily up to the next recognized label or end of
// text, so a value may span multiple lines when the model emits them
// that way.
static FEEDBACK_RE: Lazy<Regex> = Lazy::new(|| field_regex(FEEDBACK_LABEL));
static NEXT_QUESTION_RE: Lazy<Regex> = Lazy::new(|| field_regex(NEXT_QUESTION_LABEL));
static NEXT_LEVEL_RE: Lazy<Regex> = Lazy::new(|| field_regex(NEXT_LEVEL_LABEL));
static CORRECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?im)^\s*{}\s*(true|false)",
        regex::escape(CORRECT_LABEL)
    ))
    .expect("valid correctness regex")
});

fn label_boundary() -> String {
    [
        FEEDBACK_LABEL,
        NEXT_QUESTION_LABEL,
        NEXT_LEVEL_LABEL,
        CORRECT_LABEL,
    ]
    .map(regex::escape)
    .join("|")
}

// Labels only count at the start of a line, so prose that happens to
// contain a label-like substring ("incorrect: ...") neither starts nor
// terminates a field value.
fn field_regex(label: &str) -> Regex {
    let pattern = format!(
        r"(?ism)^\s*{}\s*(.*?)\s*(?:^\s*(?:{})|\z)",
        regex::escape(label),
        label_boundary()
    );
    Regex::new(&pattern).expect("valid field regex")
}

/// Default extractor: case-insensitive labeled markers, the counterpart
/// of the labels the prompt composer embeds in the evaluate template.
pub struct LabeledFieldExtractor;

impl LabeledFieldExtractor {
    fn capture(regex: &Regex, text: &str) -> Option<String> {
        regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

impl FieldExtractor for LabeledFieldExtractor {
    fn extract(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            feedback: Self::capture(&FEEDBACK_RE, text),
            next_question: Self::capture(&NEXT_QUESTION_RE, text),
            next_level: Self::capture(&NEXT_LEVEL_RE, text),
            correct: CORRECT_RE
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().eq_ignore_ascii_case("true")),
        }
    }
}

/// Turns a provider completion into a fully-populated EvaluationResult.
/// Missing structure degrades to named defaults; this never fails.
pub struct ResponseInterpreter {
    extractor: Box<dyn FieldExtractor>,
}

impl ResponseInterpreter {
    pub fn new() -> Self {
        Self::with_extractor(Box::new(LabeledFieldExtractor))
    }

    pub fn with_extractor(extractor: Box<dyn FieldExtractor>) -> Self {
        Self { extractor }
    }

    pub fn interpret(&self, output: &str, current_level: TaxonomyLevel) -> EvaluationResult {
        let fields = self.extractor.extract(output);

        // Out-of-vocabulary levels fall back to where the learner
        // already is rather than trusting an invented label.
        let next_level = fields
            .next_level
            .as_deref()
            .and_then(TaxonomyLevel::parse)
            .unwrap_or(current_level);

        let is_correct = fields
            .correct
            .unwrap_or_else(|| Self::infer_correctness(output));

        EvaluationResult {
            feedback: fields
                .feedback
                .unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()),
            next_question: fields
                .next_question
                .unwrap_or_else(|| DEFAULT_NEXT_QUESTION.to_string()),
            next_level,
            is_correct: Some(is_correct),
        }
    }

    // Keyword scan over the whole completion. Imprecise on purpose
    // ("incorrect" still matches "correct"); the explicit Correct:
    // marker wins whenever the model honors the template.
    fn infer_correctness(output: &str) -> bool {
        let lowered = output.to_lowercase();
        AFFIRMING_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
    }
}

impl Default for ResponseInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(output: &str, current_level: TaxonomyLevel) -> EvaluationResult {
        ResponseInterpreter::new().interpret(output, current_level)
    }

    #[test]
    fn test_parses_well_formed_output() {
        let result = interpret(
            "Feedback: Good job.\nNext Question: Why?\nNext Level: Relational",
            TaxonomyLevel::Unistructural,
        );

        assert_eq!(result.feedback, "Good job.");
        assert_eq!(result.next_question, "Why?");
        assert_eq!(result.next_level, TaxonomyLevel::Relational);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let result = interpret(
            "FEEDBACK: Solid.\nnext question: What next?\nNEXT LEVEL: multistructural",
            TaxonomyLevel::Unistructural,
        );

        assert_eq!(result.feedback, "Solid.");
        assert_eq!(result.next_question, "What next?");
        assert_eq!(result.next_level, TaxonomyLevel::Multistructural);
    }

    #[test]
    fn test_values_may_span_multiple_lines() {
        let result = interpret(
            "Feedback: The answer names two factors\nbut does not relate them.\nNext Question: How do they interact?\nNext Level: Relational",
            TaxonomyLevel::Multistructural,
        );

        assert_eq!(
            result.feedback,
            "The answer names two factors\nbut does not relate them."
        );
        assert_eq!(result.next_question, "How do they interact?");
    }

    #[test]
    fn test_missing_labels_degrade_to_defaults() {
        let result = interpret(
            "The model rambled and produced nothing usable.",
            TaxonomyLevel::Unistructural,
        );

        assert_eq!(result.feedback, "No feedback provided.");
        assert_eq!(result.next_question, "No next question provided.");
        assert_eq!(result.next_level, TaxonomyLevel::Unistructural);
    }

    #[test]
    fn test_missing_next_question_is_default_not_empty() {
        let result = interpret(
            "Feedback: Fine.\nNext Level: Relational",
            TaxonomyLevel::Unistructural,
        );

        assert_eq!(result.next_question, "No next question provided.");
        assert_ne!(result.next_question, "");
    }

    #[test]
    fn test_invented_level_falls_back_to_current() {
        let result = interpret(
            "Feedback: ok\nNext Question: q\nNext Level: Transcendent",
            TaxonomyLevel::Relational,
        );

        assert_eq!(result.next_level, TaxonomyLevel::Relational);
    }

    #[test]
    fn test_next_level_always_in_taxonomy() {
        let outputs = [
            "Next Level: Relational",
            "Next Level: banana",
            "Next Level:",
            "no labels at all",
            "Next Level: EXTENDED ABSTRACT",
        ];
        for output in outputs {
            let result = interpret(output, TaxonomyLevel::Prestructural);
            assert!(TaxonomyLevel::ALL.contains(&result.next_level));
        }
    }

    #[test]
    fn test_explicit_correct_marker_wins() {
        let result = interpret(
            "Feedback: That is wrong.\nCorrect: false",
            TaxonomyLevel::Unistructural,
        );
        assert_eq!(result.is_correct, Some(false));

        let result = interpret("Correct: TRUE", TaxonomyLevel::Unistructural);
        assert_eq!(result.is_correct, Some(true));
    }

    #[test]
    fn test_keyword_inference_without_marker() {
        let result = interpret(
            "That is broadly CORRECT, well reasoned.",
            TaxonomyLevel::Unistructural,
        );
        assert_eq!(result.is_correct, Some(true));

        let result = interpret(
            "The answer misses the point entirely.",
            TaxonomyLevel::Unistructural,
        );
        assert_eq!(result.is_correct, Some(false));
    }

    #[test]
    fn test_value_stops_at_next_label_not_first_newline() {
        let result = interpret(
            "Feedback: Line one.\nLine two.\nCorrect: true\nNext Question: Why?\nNext Level: Relational",
            TaxonomyLevel::Unistructural,
        );

        assert_eq!(result.feedback, "Line one.\nLine two.");
        assert_eq!(result.is_correct, Some(true));
        assert_eq!(result.next_question, "Why?");
    }

    #[test]
    fn test_label_like_prose_does_not_truncate_value() {
        let result = interpret(
            "Feedback: The claim is incorrect: the sign flips for negatives.\nNext Question: Why?\nNext Level: Relational\nCorrect: false",
            TaxonomyLevel::Unistructural,
        );

        assert_eq!(
            result.feedback,
            "The claim is incorrect: the sign flips for negatives."
        );
        assert_eq!(result.next_question, "Why?");
        assert_eq!(result.is_correct, Some(false));
    }

    #[test]
    fn test_midline_label_does_not_start_a_field() {
        let result = interpret(
            "The phrase next question: appears in prose only.",
            TaxonomyLevel::Unistructural,
        );

        assert_eq!(result.next_question, "No next question provided.");
    }

    #[test]
    fn test_custom_extractor_is_pluggable() {
        struct FixedExtractor;
        impl FieldExtractor for FixedExtractor {
            fn extract(&self, _text: &str) -> ExtractedFields {
                ExtractedFields {
                    feedback: Some("from json".to_string()),
                    next_question: None,
                    next_level: Some("Relational".to_string()),
                    correct: Some(true),
                }
            }
        }

        let interpreter = ResponseInterpreter::with_extractor(Box::new(FixedExtractor));
        let result = interpreter.interpret("ignored", TaxonomyLevel::Unistructural);

        assert_eq!(result.feedback, "from json");
        assert_eq!(result.next_question, "No next question provided.");
        assert_eq!(result.next_level, TaxonomyLevel::Relational);
        assert_eq!(result.is_correct, Some(true));
    }
}
