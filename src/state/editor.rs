// src/state/editor.rs
//! The template/section store: one closed action vocabulary, one pure
//! reduction function.
//!
//! Every operation returns a brand-new state plus the slices it touched;
//! the previous state is never mutated. Operations targeting an id that
//! does not exist are no-ops, never errors.

use serde::{Deserialize, Serialize};

use super::Slice;
use crate::entity::{unique_id, Section, Template};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub templates: Vec<Template>,
    pub sections_filter: String,
    pub preview_visible: bool,
}

#[derive(Debug, Clone)]
pub enum EditorAction {
    LoadTemplates(Vec<Template>),
    AddTemplate(Template),
    CreateDefaultTemplate,
    DuplicateTemplate(Template),
    UpdateTemplate(Template),
    DeleteTemplate(Template),
    SetActiveTemplate(Template),
    SetLastTemplateAsActive,
    AddSection(Template),
    UpdateSection(Section),
    DuplicateSection(Section),
    DeleteSection(Section),
    CreateLinkedSection(Section),
    UpdateAllLinkedSections(Section),
    SelectAllSections { template: Template, enabled: bool },
    UpdateSectionFilter(String),
    UpdatePreviewVisible(bool),
}

/// The template currently driving output, if any.
pub fn active_template(state: &EditorState) -> Option<&Template> {
    state.templates.iter().find(|t| t.active)
}

/// Sections of the active template whose title matches the sections
/// filter, case-insensitively. An empty filter matches everything.
pub fn visible_sections(state: &EditorState) -> Vec<&Section> {
    let Some(template) = active_template(state) else {
        return Vec::new();
    };
    let needle = state.sections_filter.to_lowercase();
    template
        .sections
        .iter()
        .filter(|s| needle.is_empty() || s.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn reduce(state: &EditorState, action: EditorAction) -> (EditorState, Vec<Slice>) {
    match action {
        EditorAction::LoadTemplates(templates) => {
            let mut next = state.clone();
            next.templates = templates;
            (next, vec![Slice::Templates])
        }

        EditorAction::AddTemplate(template) => {
            let mut next = state.clone();
            if template.active {
                for t in &mut next.templates {
                    t.active = false;
                }
            }
            next.templates.push(template);
            (next, vec![Slice::Templates])
        }

        EditorAction::CreateDefaultTemplate => {
            let mut next = state.clone();
            let template = Template::new("Default Template", &next.templates);
            for t in &mut next.templates {
                t.active = false;
            }
            next.templates.insert(0, template);
            (next, vec![Slice::Templates])
        }

        EditorAction::DuplicateTemplate(template) => {
            let mut next = state.clone();
            let mut title = format!("{} (Copy)", template.title);
            let same_names = next
                .templates
                .iter()
                .filter(|t| t.title.contains(&title))
                .count();
            if same_names > 0 {
                title = format!("{} ({})", title, same_names);
            }
            let ids: Vec<i32> = next.templates.iter().map(|t| t.id).collect();
            let id = unique_id(&ids);
            let sections = template
                .sections
                .iter()
                .cloned()
                .map(|mut s| {
                    s.template_id = id;
                    s
                })
                .collect();
            next.templates.push(Template {
                title,
                id,
                // The copy never steals the active slot.
                active: false,
                sections,
            });
            (next, vec![Slice::Templates])
        }

        EditorAction::UpdateTemplate(template) => {
            if !state.templates.iter().any(|t| t.id == template.id) {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            for t in &mut next.templates {
                if t.id == template.id {
                    *t = template.clone();
                }
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::DeleteTemplate(template) => {
            if !state.templates.iter().any(|t| t.id == template.id) {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            let was_active = next
                .templates
                .iter()
                .any(|t| t.id == template.id && t.active);
            next.templates.retain(|t| t.id != template.id);
            // Never leave a non-empty list with nothing active.
            if was_active {
                let last = next.templates.len().saturating_sub(1);
                for (i, t) in next.templates.iter_mut().enumerate() {
                    t.active = i == last;
                }
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::SetActiveTemplate(template) => {
            if !state.templates.iter().any(|t| t.id == template.id) {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            for t in &mut next.templates {
                t.active = t.id == template.id;
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::SetLastTemplateAsActive => {
            if state.templates.is_empty() {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            let last = next.templates.len() - 1;
            for (i, t) in next.templates.iter_mut().enumerate() {
                t.active = i == last;
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::AddSection(template) => {
            let Some(index) = state.templates.iter().position(|t| t.id == template.id) else {
                return (state.clone(), Vec::new());
            };
            let mut next = state.clone();
            let section = Section::new("New Section", &next.templates[index]);
            next.templates[index].sections.push(section);
            (next, vec![Slice::Templates])
        }

        EditorAction::UpdateSection(section) => {
            let found = state
                .templates
                .iter()
                .any(|t| t.id == section.template_id && t.section(section.id).is_some());
            if !found {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            for t in &mut next.templates {
                if t.id != section.template_id {
                    continue;
                }
                for s in &mut t.sections {
                    if s.id == section.id {
                        *s = section.clone();
                    }
                }
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::DuplicateSection(section) => {
            let Some(index) = state
                .templates
                .iter()
                .position(|t| t.id == section.template_id)
            else {
                return (state.clone(), Vec::new());
            };
            let mut next = state.clone();
            let ids: Vec<i32> = next.templates[index].sections.iter().map(|s| s.id).collect();
            let mut copy = section.clone();
            copy.id = unique_id(&ids);
            copy.title = format!("{} (Copy)", section.title);
            next.templates[index].sections.push(copy);
            (next, vec![Slice::Templates])
        }

        EditorAction::DeleteSection(section) => {
            let Some(index) = state
                .templates
                .iter()
                .position(|t| t.id == section.template_id)
            else {
                return (state.clone(), Vec::new());
            };
            if state.templates[index].section(section.id).is_none() {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            let sections = &mut next.templates[index].sections;
            sections.retain(|s| s.id != section.id);
            // Anything that pointed at the deleted section leaves its group.
            for s in sections.iter_mut() {
                if s.linked_id == section.id {
                    s.linked = false;
                    s.linked_id = -1;
                }
            }
            // If the deleted section was a group member, its parent may now
            // be alone; an empty group dissolves.
            let parent_id = sections
                .iter()
                .find(|s| s.id == section.linked_id)
                .map(|s| s.id);
            if let Some(parent_id) = parent_id {
                let remaining_children = sections
                    .iter()
                    .filter(|s| s.linked_id == parent_id && s.id != s.linked_id)
                    .count();
                if remaining_children == 0 {
                    for s in sections.iter_mut() {
                        if s.id == parent_id {
                            s.linked = false;
                            s.linked_id = -1;
                        }
                    }
                }
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::CreateLinkedSection(section) => {
            let Some(index) = state.templates.iter().position(|t| t.active) else {
                return (state.clone(), Vec::new());
            };
            if state.templates[index].section(section.id).is_none() {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            let template = &mut next.templates[index];
            let group_id = if section.linked_id != -1 {
                section.linked_id
            } else {
                section.id
            };
            // A fresh group: mark the source section as its parent in the
            // same reduction, so the group is never half-formed.
            if section.linked_id == -1 {
                for s in &mut template.sections {
                    if s.id == section.id {
                        s.linked = true;
                        s.linked_id = group_id;
                    }
                }
            }
            let ids: Vec<i32> = template.sections.iter().map(|s| s.id).collect();
            let mut linked = section.clone();
            linked.id = unique_id(&ids);
            linked.template_id = template.id;
            linked.linked = true;
            linked.linked_id = group_id;
            template.sections.push(linked);
            (next, vec![Slice::Templates])
        }

        EditorAction::UpdateAllLinkedSections(section) => {
            let Some(index) = state.templates.iter().position(|t| t.active) else {
                return (state.clone(), Vec::new());
            };
            let mut next = state.clone();
            for s in &mut next.templates[index].sections {
                let is_same_id = s.id == section.id;
                let is_linked = s.in_linked_group();
                let is_parent = is_linked && section.linked_id == s.id;
                let is_child = is_linked && !is_parent && section.linked_id == s.linked_id;
                if is_linked && (is_same_id || is_parent || is_child) {
                    let mut updated = section.clone();
                    updated.id = s.id;
                    updated.template_id = s.template_id;
                    updated.linked = s.linked;
                    updated.linked_id = s.linked_id;
                    *s = updated;
                }
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::SelectAllSections { template, enabled } => {
            let Some(index) = state.templates.iter().position(|t| t.id == template.id) else {
                return (state.clone(), Vec::new());
            };
            let mut next = state.clone();
            for s in &mut next.templates[index].sections {
                s.active = enabled;
            }
            (next, vec![Slice::Templates])
        }

        EditorAction::UpdateSectionFilter(filter) => {
            let mut next = state.clone();
            next.sections_filter = filter;
            (next, vec![Slice::SectionsFilter])
        }

        EditorAction::UpdatePreviewVisible(visible) => {
            let mut next = state.clone();
            next.preview_visible = visible;
            (next, vec![Slice::PreviewVisible])
        }
    }
}
