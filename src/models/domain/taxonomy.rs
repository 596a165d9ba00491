use serde::{Deserialize, Serialize};

/// One stage of the SOLO learning-progression model, ordered from least
/// to most sophisticated expected answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum TaxonomyLevel {
    Prestructural,
    Unistructural,
    Multistructural,
    Relational,
    #[serde(rename = "Extended Abstract", alias = "ExtendedAbstract")]
    ExtendedAbstract,
}

impl TaxonomyLevel {
    /// The full sequence in progression order.
    pub const ALL: [TaxonomyLevel; 5] = [
        TaxonomyLevel::Prestructural,
        TaxonomyLevel::Unistructural,
        TaxonomyLevel::Multistructural,
        TaxonomyLevel::Relational,
        TaxonomyLevel::ExtendedAbstract,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyLevel::Prestructural => "Prestructural",
            TaxonomyLevel::Unistructural => "Unistructural",
            TaxonomyLevel::Multistructural => "Multistructural",
            TaxonomyLevel::Relational => "Relational",
            TaxonomyLevel::ExtendedAbstract => "Extended Abstract",
        }
    }

    /// Lenient lookup of a model-emitted level name. Returns `None` for
    /// anything outside the taxonomy so callers can fall back to the
    /// level they already hold.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "prestructural" => Some(TaxonomyLevel::Prestructural),
            "unistructural" => Some(TaxonomyLevel::Unistructural),
            "multistructural" => Some(TaxonomyLevel::Multistructural),
            "relational" => Some(TaxonomyLevel::Relational),
            "extended abstract" | "extendedabstract" => Some(TaxonomyLevel::ExtendedAbstract),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaxonomyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
