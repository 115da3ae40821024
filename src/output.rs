// src/output.rs
//! Derives the concatenated output text for the active template.

use chrono::Utc;

use crate::datefmt::format_date;
use crate::entity::{Section, SectionKind, Template};

/// Compute a section's rendered value and whether it counts as set.
///
/// A date section always formats *something* (falling back to now, for
/// previews), but only counts as set once a date was explicitly chosen.
pub fn section_value(section: &Section) -> (String, bool) {
    match section.kind {
        SectionKind::Single => {
            let value = section.single_text_value.clone().unwrap_or_default();
            let has_value = !value.is_empty();
            (value, has_value)
        }
        SectionKind::Multiple => {
            let values = section.multiple_text_value.as_deref().unwrap_or(&[]);
            (values.join(&section.separator), !values.is_empty())
        }
        SectionKind::Input => {
            let value = section.input_value.clone().unwrap_or_default();
            let has_value = !value.is_empty();
            (value, has_value)
        }
        SectionKind::Date => {
            let date = section.date_value.unwrap_or_else(Utc::now);
            let value = format_date(&date, section.effective_date_format());
            (value, section.date_value.is_some())
        }
    }
}

/// Concatenate the active template's active sections, in stored order.
///
/// A section with no value contributes nothing at all - not even its
/// prefix and suffix.
pub fn derive_output(active_template: Option<&Template>) -> String {
    let Some(template) = active_template else {
        return String::new();
    };

    let mut output = String::new();
    for section in &template.sections {
        if !section.active {
            continue;
        }
        let (value, has_value) = section_value(section);
        if has_value {
            output.push_str(&section.prefix);
            output.push_str(&value);
            output.push_str(&section.suffix);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn template_with(sections: Vec<Section>) -> Template {
        Template {
            title: "T".to_string(),
            id: 0,
            active: true,
            sections,
        }
    }

    fn single_section(value: Option<&str>, active: bool) -> Section {
        let mut section = Section::new("S", &template_with(Vec::new()));
        section.active = active;
        section.prefix = "[".to_string();
        section.suffix = "]".to_string();
        section.single_text_value = value.map(str::to_string);
        section
    }

    #[test]
    fn test_no_active_template_is_empty() {
        assert_eq!(derive_output(None), "");
    }

    #[test]
    fn test_single_section_wrapped() {
        let template = template_with(vec![single_section(Some("Hi"), true)]);
        assert_eq!(derive_output(Some(&template)), "[Hi]");
    }

    #[test]
    fn test_inactive_section_is_silent() {
        let template = template_with(vec![single_section(Some("Hi"), false)]);
        assert_eq!(derive_output(Some(&template)), "");
    }

    #[test]
    fn test_empty_value_suppresses_prefix_suffix() {
        let template = template_with(vec![single_section(None, true)]);
        assert_eq!(derive_output(Some(&template)), "");

        let template = template_with(vec![single_section(Some(""), true)]);
        assert_eq!(derive_output(Some(&template)), "");
    }

    #[test]
    fn test_multiple_joined_with_separator() {
        let mut section = single_section(None, true);
        section.kind = SectionKind::Multiple;
        section.separator = ", ".to_string();
        section.multiple_text_value = Some(vec!["a".to_string(), "b".to_string()]);

        let template = template_with(vec![section]);
        assert_eq!(derive_output(Some(&template)), "[a, b]");
    }

    #[test]
    fn test_multiple_empty_list_is_silent() {
        let mut section = single_section(None, true);
        section.kind = SectionKind::Multiple;
        section.multiple_text_value = Some(Vec::new());

        let template = template_with(vec![section]);
        assert_eq!(derive_output(Some(&template)), "");
    }

    #[test]
    fn test_date_section_formats_explicit_value() {
        let mut section = single_section(None, true);
        section.kind = SectionKind::Date;
        section.date_format = Some("DD/MM/YYYY".to_string());
        section.date_value = Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());

        let template = template_with(vec![section]);
        assert_eq!(derive_output(Some(&template)), "[05/01/2024]");
    }

    #[test]
    fn test_date_section_without_value_is_silent() {
        let mut section = single_section(None, true);
        section.kind = SectionKind::Date;
        section.date_format = Some("DD/MM/YYYY".to_string());

        let template = template_with(vec![section]);
        assert_eq!(derive_output(Some(&template)), "");

        // The preview value still formats, it just does not count as set.
        let (value, has_value) = section_value(&template.sections[0]);
        assert!(!has_value);
        assert_eq!(value.len(), "05/01/2024".len());
    }

    #[test]
    fn test_custom_date_format() {
        let mut section = single_section(None, true);
        section.kind = SectionKind::Date;
        section.prefix = String::new();
        section.suffix = String::new();
        section.date_format = Some(crate::entity::CUSTOM_DATE_FORMAT.to_string());
        section.custom_date_format = Some("Do MMMM YYYY".to_string());
        section.date_value = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let template = template_with(vec![section]);
        assert_eq!(derive_output(Some(&template)), "1st January 2024");
    }

    #[test]
    fn test_sections_concatenate_in_stored_order() {
        let mut first = single_section(Some("one"), true);
        first.prefix = String::new();
        first.suffix = " ".to_string();
        let mut second = single_section(Some("two"), true);
        second.id = 1;
        second.prefix = String::new();
        second.suffix = String::new();

        let template = template_with(vec![first, second]);
        assert_eq!(derive_output(Some(&template)), "one two");
    }

    #[test]
    fn test_output_is_deterministic() {
        let template = template_with(vec![single_section(Some("Hi"), true)]);
        assert_eq!(derive_output(Some(&template)), derive_output(Some(&template)));
    }
}
