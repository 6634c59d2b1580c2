use serde::{Deserialize, Serialize};

/// One employment entry extracted from a parsed résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub title: String,
    pub employer_name: String,
    pub start_date: String,
    /// Literal `"Current"` while the position is ongoing, otherwise "Month YYYY".
    pub end_date: String,
    pub highlights: Vec<Highlight>,
}

/// One cleaned bullet point from a position's description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub text: String,
    pub improvement_choices: Vec<String>,
}

impl Highlight {
    pub fn new(text: String) -> Self {
        Self {
            text,
            improvement_choices: Vec::new(),
        }
    }
}
