// src/entity/section.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Template;

/// Sentinel preset meaning "use the section's customDateFormat pattern".
pub const CUSTOM_DATE_FORMAT: &str = "Custom";

/// Pattern applied when a date section has no format configured.
pub const DEFAULT_DATE_FORMAT: &str = "DD/MM/YYYY";

/// Format presets offered by the section editor, `Custom` first.
pub const DATE_FORMAT_PRESETS: &[&str] = &[
    CUSTOM_DATE_FORMAT,
    "DD/MM/YYYY",
    "MM/DD/YYYY",
    "YYYY/MM/DD",
    "DD-MM-YYYY",
    "MM-DD-YYYY",
    "YYYY-MM-DD",
    "DD MMM YYYY",
    "MMM DD YYYY",
    "YYYY DD MMM",
    "DD MMMM YYYY",
    "MMMM DD YYYY",
    "YYYY MMMM DD",
    "MMMM Do, YYYY",
    "Do MMMM YYYY",
    "YYYY-MM-DD HH:mm:ss",
    "MMMM DD, YYYY h:mm A",
    "MM/DD/YY hh:mm:ss A",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    #[default]
    Single,
    Multiple,
    Input,
    Date,
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Single => write!(f, "single"),
            SectionKind::Multiple => write!(f, "multiple"),
            SectionKind::Input => write!(f, "input"),
            SectionKind::Date => write!(f, "date"),
        }
    }
}

impl std::str::FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(SectionKind::Single),
            "multiple" => Ok(SectionKind::Multiple),
            "input" => Ok(SectionKind::Input),
            "date" => Ok(SectionKind::Date),
            _ => Err(format!("Invalid section type: {}", s)),
        }
    }
}

/// One configurable output fragment of a template.
///
/// Field names serialize in camelCase so stored state matches the JSON
/// the desktop application already writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub id: i32,
    pub template_id: i32,
    pub linked: bool,
    /// Linked-group id shared by all members; `-1` when not linked.
    /// The group's parent is the section whose own `id` equals this.
    pub linked_id: i32,
    pub active: bool,
    pub options: Vec<String>,
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_text_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_text_value: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_value: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::datefmt::deserialize_date_value"
    )]
    pub date_value: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_date_format: Option<String>,
    pub background_class: String,
}

impl Section {
    /// New default section for `template`, id scoped to its siblings and
    /// title deduplicated against them.
    pub fn new(title: &str, template: &Template) -> Self {
        let ids: Vec<i32> = template.sections.iter().map(|s| s.id).collect();
        let titles: Vec<&str> = template.sections.iter().map(|s| s.title.as_str()).collect();
        Self {
            title: super::dedup_title(title, &titles),
            kind: SectionKind::Single,
            id: super::unique_id(&ids),
            template_id: template.id,
            linked: false,
            linked_id: -1,
            active: true,
            options: Vec::new(),
            separator: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            single_text_value: Some(String::new()),
            multiple_text_value: None,
            input_value: None,
            date_value: None,
            date_format: None,
            custom_date_format: None,
            background_class: super::random_background_class(),
        }
    }

    /// The pattern `datefmt::format_date` should apply for this section.
    pub fn effective_date_format(&self) -> &str {
        match self.date_format.as_deref() {
            Some(CUSTOM_DATE_FORMAT) => self
                .custom_date_format
                .as_deref()
                .unwrap_or(DEFAULT_DATE_FORMAT),
            Some(format) => format,
            None => DEFAULT_DATE_FORMAT,
        }
    }

    /// Whether this section belongs to a linked group.
    pub fn in_linked_group(&self) -> bool {
        self.linked && self.linked_id != -1
    }

    /// Whether this section is the parent of its linked group.
    pub fn is_linked_parent(&self) -> bool {
        self.in_linked_group() && self.linked_id == self.id
    }
}
