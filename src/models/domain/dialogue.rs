use serde::{Deserialize, Serialize};

/// Who produced a turn in the tutoring dialogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Student,
    Educator,
}

/// One exchange in the conversation. An ordered `Vec<DialogueTurn>` is
/// chronological history; the caller owns persistence.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialogueTurn {
    pub sender: Sender,
    pub content: String,
}

impl DialogueTurn {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
        }
    }
}

/// Rejects history that cannot have come from a real dialogue. Structural
/// malformation (unknown sender, wrong shape) is already a deserialization
/// error at the boundary; this catches blank turns.
pub fn validate_history(history: &[DialogueTurn]) -> Result<(), String> {
    for (index, turn) in history.iter().enumerate() {
        if turn.content.trim().is_empty() {
            return Err(format!("history turn {} has empty content", index));
        }
    }
    Ok(())
}
