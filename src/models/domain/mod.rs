pub mod dialogue;
pub mod evaluation;
pub mod taxonomy;
pub use dialogue::{DialogueTurn, Sender};
pub use evaluation::EvaluationResult;
pub use taxonomy::TaxonomyLevel;
