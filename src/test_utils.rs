#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{DialogueTurn, Sender};

    /// A short, well-formed dialogue history
    pub fn sample_history() -> Vec<DialogueTurn> {
        vec![
            DialogueTurn::new(Sender::Educator, "What is photosynthesis?"),
            DialogueTurn::new(Sender::Student, "Plants making food from light."),
        ]
    }

    /// A completion that honors every label in the evaluate template
    pub fn labeled_completion() -> &'static str {
        "Feedback: Good job.\nNext Question: Why?\nNext Level: Relational\nCorrect: true"
    }

    /// A completion with no recognizable structure
    pub fn unlabeled_completion() -> &'static str {
        "The answer shows some understanding but lacks depth overall."
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Sender;

    #[test]
    fn test_sample_history_is_ordered() {
        let history = sample_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, Sender::Educator);
        assert_eq!(history[1].sender, Sender::Student);
    }

    #[test]
    fn test_labeled_completion_carries_all_labels() {
        let text = labeled_completion();
        assert!(text.contains("Feedback:"));
        assert!(text.contains("Next Question:"));
        assert!(text.contains("Next Level:"));
        assert!(text.contains("Correct:"));
    }
}
