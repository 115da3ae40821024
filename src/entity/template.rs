// src/entity/template.rs
use serde::{Deserialize, Serialize};

use super::Section;

/// A named, ordered collection of sections. At most one template is
/// active at a time; only the active one feeds the derived output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub title: String,
    pub id: i32,
    pub active: bool,
    pub sections: Vec<Section>,
}

impl Template {
    /// New empty template, id allocated against `existing` and title
    /// deduplicated against theirs. Created active, matching the
    /// editor's behavior of jumping to a freshly created template.
    pub fn new(title: &str, existing: &[Template]) -> Self {
        let ids: Vec<i32> = existing.iter().map(|t| t.id).collect();
        let titles: Vec<&str> = existing.iter().map(|t| t.title.as_str()).collect();
        Self {
            title: super::dedup_title(title, &titles),
            id: super::unique_id(&ids),
            active: true,
            sections: Vec::new(),
        }
    }

    pub fn section(&self, id: i32) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}
