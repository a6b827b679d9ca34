use serde::{Deserialize, Serialize};

/// SKU-level sales-contribution classes (Pareto-style split)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Core,
    Average,
    Tail,
}

impl Classification {
    /// Wire/code value
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Core => "core",
            Classification::Average => "average",
            Classification::Tail => "tail",
        }
    }

    /// Capitalized label for display and export
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Core => "Core",
            Classification::Average => "Average",
            Classification::Tail => "Tail",
        }
    }

    pub fn all() -> Vec<Classification> {
        vec![
            Classification::Core,
            Classification::Average,
            Classification::Tail,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "core" => Some(Classification::Core),
            "average" => Some(Classification::Average),
            "tail" => Some(Classification::Tail),
            _ => None,
        }
    }
}
