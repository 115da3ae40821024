// src/entity/note.rs
use serde::{Deserialize, Serialize};

/// A floating sticky note, unrelated to templates. Geometry fields are
/// only present once the desktop shell has opened a window for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i32,
    pub text: String,
    pub opened: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Note {
    /// New empty note, id allocated against `existing`.
    pub fn new(existing: &[Note]) -> Self {
        let ids: Vec<i32> = existing.iter().map(|n| n.id).collect();
        Self {
            id: super::unique_id(&ids),
            text: String::new(),
            opened: false,
            background_class: Some(super::random_background_class()),
            x: None,
            y: None,
            width: None,
            height: None,
        }
    }
}
