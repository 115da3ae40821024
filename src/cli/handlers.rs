use std::env;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use crate::entity::{Section, SectionKind, Template};
use crate::error::{NotecraftrError, Result};
use crate::output::{derive_output, section_value};
use crate::state::{
    editor, notes, settings, text_filter, EditorAction, EditorState, NotesAction, SettingsAction,
    TextFilterAction, Theme,
};
use crate::storage::Database;

/// Find the workspace root by looking for .notecraftr/ or .git/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".notecraftr").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_database() -> Result<Database> {
    Database::open(&find_project_root())
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(NotecraftrError::InvalidArgument(format!(
            "expected \"on\" or \"off\", got \"{}\"",
            other
        ))),
    }
}

fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight exists");
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    Err(NotecraftrError::InvalidArgument(format!(
        "unparsable date \"{}\" (expected RFC 3339 or YYYY-MM-DD)",
        value
    )))
}

fn resolve_template<'a>(state: &'a EditorState, id: Option<i32>) -> Result<&'a Template> {
    match id {
        Some(id) => state
            .templates
            .iter()
            .find(|t| t.id == id)
            .ok_or(NotecraftrError::TemplateNotFound(id)),
        None => editor::active_template(state).ok_or(NotecraftrError::NoActiveTemplate),
    }
}

fn resolve_section<'a>(template: &'a Template, id: i32) -> Result<&'a Section> {
    template
        .section(id)
        .ok_or(NotecraftrError::SectionNotFound(id))
}

// ========== Workspace ==========

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let _db = Database::init(&root)?;

    println!("Initialized notecraftr workspace in {}", root.display());
    Ok(())
}

// ========== Templates ==========

pub fn handle_template_add(title: String) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = Template::new(&title, &state.templates);
    let id = template.id;
    let title = template.title.clone();

    let (next, changed) = editor::reduce(&state, EditorAction::AddTemplate(template));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!("Created template {} - {}", id, title);
    Ok(())
}

pub fn handle_template_list(json: bool) -> Result<()> {
    let db = open_database()?;
    let state = db.load_editor_state();

    if json {
        println!("{}", serde_json::to_string_pretty(&state.templates)?);
    } else {
        for template in &state.templates {
            let marker = if template.active { "*" } else { " " };
            println!(
                "{} {} - {} ({} sections)",
                marker,
                template.id,
                template.title,
                template.sections.len()
            );
        }
    }
    Ok(())
}

pub fn handle_template_duplicate(id: i32) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = resolve_template(&state, Some(id))?.clone();
    let (next, changed) = editor::reduce(&state, EditorAction::DuplicateTemplate(template));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    let copy = next.templates.last().expect("duplicate appends");
    println!("Created template {} - {}", copy.id, copy.title);
    Ok(())
}

pub fn handle_template_delete(id: i32) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = resolve_template(&state, Some(id))?.clone();
    let (next, changed) = editor::reduce(&state, EditorAction::DeleteTemplate(template));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!("Deleted template {}", id);
    Ok(())
}

pub fn handle_template_activate(id: i32) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = resolve_template(&state, Some(id))?.clone();
    let title = template.title.clone();
    let (next, changed) = editor::reduce(&state, EditorAction::SetActiveTemplate(template));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!("Active template is now {} - {}", id, title);
    Ok(())
}

pub fn handle_template_rename(id: i32, title: String) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let mut template = resolve_template(&state, Some(id))?.clone();
    template.title = title.clone();
    let (next, changed) = editor::reduce(&state, EditorAction::UpdateTemplate(template));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!("Renamed template {} to {}", id, title);
    Ok(())
}

// ========== Sections ==========

pub fn handle_section_add(template_id: Option<i32>) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = resolve_template(&state, template_id)?.clone();
    let owner = template.id;
    let (next, changed) = editor::reduce(&state, EditorAction::AddSection(template));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    let section = next
        .templates
        .iter()
        .find(|t| t.id == owner)
        .and_then(|t| t.sections.last())
        .expect("add appends");
    println!("Created section {} - {}", section.id, section.title);
    Ok(())
}

pub fn handle_section_list(template_id: Option<i32>, json: bool) -> Result<()> {
    let db = open_database()?;
    let state = db.load_editor_state();

    let sections: Vec<&Section> = match template_id {
        Some(id) => resolve_template(&state, Some(id))?.sections.iter().collect(),
        // Listing the active template honors the sections filter, the
        // way the editor view does.
        None => {
            editor::active_template(&state).ok_or(NotecraftrError::NoActiveTemplate)?;
            editor::visible_sections(&state)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
    } else {
        for section in sections {
            let marker = if section.active { "*" } else { " " };
            let (value, has_value) = section_value(section);
            let preview = if has_value { value } else { "<no value>".to_string() };
            println!(
                "{} {} - {} [{}] {}",
                marker, section.id, section.title, section.kind, preview
            );
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_section_update(
    id: i32,
    template_id: Option<i32>,
    title: Option<String>,
    kind: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
    separator: Option<String>,
    options: Vec<String>,
    value: Option<String>,
    selected: Vec<String>,
    date: Option<String>,
    date_format: Option<String>,
    custom_date_format: Option<String>,
    active: Option<String>,
) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();
    let settings = db.load_settings();

    let template = resolve_template(&state, template_id)?;
    let mut section = resolve_section(template, id)?.clone();

    if let Some(title) = title {
        section.title = title;
    }
    if let Some(kind) = kind {
        section.kind = kind
            .parse::<SectionKind>()
            .map_err(NotecraftrError::InvalidArgument)?;
    }
    if let Some(prefix) = prefix {
        section.prefix = prefix;
    }
    if let Some(suffix) = suffix {
        section.suffix = suffix;
    }
    if let Some(separator) = separator {
        section.separator = separator;
    }
    if !options.is_empty() {
        section.options = options;
    }
    if let Some(value) = value {
        match section.kind {
            SectionKind::Input => section.input_value = Some(value),
            _ => section.single_text_value = Some(value),
        }
    }
    if !selected.is_empty() {
        section.multiple_text_value = Some(selected);
    }
    if let Some(date) = date {
        section.date_value = Some(parse_date(&date)?);
    }
    if let Some(date_format) = date_format {
        section.date_format = Some(date_format);
    }
    if let Some(custom_date_format) = custom_date_format {
        section.custom_date_format = Some(custom_date_format);
    }
    if let Some(active) = active {
        section.active = parse_toggle(&active)?;
    }

    // Edits to a linked section fan out to its whole group when the
    // feature is enabled, exactly as the editor view dispatches them.
    let action = if settings.linked_sections_enabled && section.linked {
        EditorAction::UpdateAllLinkedSections(section)
    } else {
        EditorAction::UpdateSection(section)
    };
    let (next, changed) = editor::reduce(&state, action);
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!("Updated section {}", id);
    Ok(())
}

pub fn handle_section_delete(id: i32, template_id: Option<i32>) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = resolve_template(&state, template_id)?;
    let section = resolve_section(template, id)?.clone();
    let (next, changed) = editor::reduce(&state, EditorAction::DeleteSection(section));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!("Deleted section {}", id);
    Ok(())
}

pub fn handle_section_duplicate(id: i32, template_id: Option<i32>) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = resolve_template(&state, template_id)?;
    let owner = template.id;
    let section = resolve_section(template, id)?.clone();
    let (next, changed) = editor::reduce(&state, EditorAction::DuplicateSection(section));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    let copy = next
        .templates
        .iter()
        .find(|t| t.id == owner)
        .and_then(|t| t.sections.last())
        .expect("duplicate appends");
    println!("Created section {} - {}", copy.id, copy.title);
    Ok(())
}

pub fn handle_section_link(id: i32) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let template = editor::active_template(&state).ok_or(NotecraftrError::NoActiveTemplate)?;
    let owner = template.id;
    let section = resolve_section(template, id)?.clone();
    let (next, changed) = editor::reduce(&state, EditorAction::CreateLinkedSection(section));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    let linked = next
        .templates
        .iter()
        .find(|t| t.id == owner)
        .and_then(|t| t.sections.last())
        .expect("link appends");
    println!(
        "Created section {} linked to group {}",
        linked.id, linked.linked_id
    );
    Ok(())
}

pub fn handle_section_select_all(state_arg: String, template_id: Option<i32>) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let enabled = parse_toggle(&state_arg)?;
    let template = resolve_template(&state, template_id)?.clone();
    let id = template.id;
    let (next, changed) = editor::reduce(
        &state,
        EditorAction::SelectAllSections { template, enabled },
    );
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!(
        "{} all sections of template {}",
        if enabled { "Enabled" } else { "Disabled" },
        id
    );
    Ok(())
}

pub fn handle_section_filter(text: String) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let (next, changed) = editor::reduce(&state, EditorAction::UpdateSectionFilter(text));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    if next.sections_filter.is_empty() {
        println!("Sections filter cleared");
    } else {
        println!("Sections filter set to \"{}\"", next.sections_filter);
    }
    Ok(())
}

// ========== Output ==========

pub fn handle_output(json: bool) -> Result<()> {
    let db = open_database()?;
    let state = db.load_editor_state();

    let output = derive_output(editor::active_template(&state));
    if json {
        println!("{}", serde_json::json!({ "output": output }))
    } else {
        println!("{}", output);
    }
    Ok(())
}

pub fn handle_preview(state_arg: String) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_editor_state();

    let visible = parse_toggle(&state_arg)?;
    let (next, changed) = editor::reduce(&state, EditorAction::UpdatePreviewVisible(visible));
    db.persist_editor(&next, &changed)?;
    db.save()?;

    println!("Preview {}", if visible { "shown" } else { "hidden" });
    Ok(())
}

// ========== Notes ==========

pub fn handle_note_add() -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_notes_state();

    let (next, changed) = notes::reduce(&state, NotesAction::AddNote);
    db.persist_notes(&next, &changed)?;
    db.save()?;

    let note = next.notes.last().expect("add appends");
    println!("Created note {}", note.id);
    Ok(())
}

pub fn handle_note_list(json: bool) -> Result<()> {
    let db = open_database()?;
    let state = db.load_notes_state();

    if json {
        println!("{}", serde_json::to_string_pretty(&state.notes)?);
    } else {
        for note in &state.notes {
            let marker = if note.opened { "*" } else { " " };
            let line = note.text.lines().next().unwrap_or("");
            println!("{} {} - {}", marker, note.id, line);
        }
    }
    Ok(())
}

pub fn handle_note_update(id: i32, text: Option<String>, opened: Option<String>) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_notes_state();

    let mut note = state
        .notes
        .iter()
        .find(|n| n.id == id)
        .ok_or(NotecraftrError::NoteNotFound(id))?
        .clone();
    if let Some(text) = text {
        note.text = text;
    }
    if let Some(opened) = opened {
        note.opened = parse_toggle(&opened)?;
    }

    let (next, changed) = notes::reduce(&state, NotesAction::UpdateNote(note));
    db.persist_notes(&next, &changed)?;
    db.save()?;

    println!("Updated note {}", id);
    Ok(())
}

pub fn handle_note_delete(id: i32) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_notes_state();

    let note = state
        .notes
        .iter()
        .find(|n| n.id == id)
        .ok_or(NotecraftrError::NoteNotFound(id))?
        .clone();
    let (next, changed) = notes::reduce(&state, NotesAction::DeleteNote(note));
    db.persist_notes(&next, &changed)?;
    db.save()?;

    println!("Deleted note {}", id);
    Ok(())
}

pub fn handle_note_duplicate(id: i32) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_notes_state();

    let note = state
        .notes
        .iter()
        .find(|n| n.id == id)
        .ok_or(NotecraftrError::NoteNotFound(id))?
        .clone();
    let (next, changed) = notes::reduce(&state, NotesAction::DuplicateNote(note));
    db.persist_notes(&next, &changed)?;
    db.save()?;

    let copy = next.notes.last().expect("duplicate appends");
    println!("Created note {}", copy.id);
    Ok(())
}

// ========== Text filter ==========

pub fn handle_filter_text(value: String) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_text_filter_state();

    let (next, changed) = text_filter::reduce(&state, TextFilterAction::UpdateTargetText(value));
    db.persist_text_filter(&next, &changed)?;
    db.save()?;

    println!("Filter target text updated");
    Ok(())
}

pub fn handle_filter_toggle(which: String, state_arg: String) -> Result<()> {
    let mut db = open_database()?;
    let state = db.load_text_filter_state();

    let enabled = parse_toggle(&state_arg)?;
    let action = match which.to_lowercase().as_str() {
        "numbers" => TextFilterAction::UpdateFilterNumbers(enabled),
        "letters" => TextFilterAction::UpdateFilterLetters(enabled),
        "special" => TextFilterAction::UpdateFilterSpecialCharacters(enabled),
        "spaces" => TextFilterAction::UpdateFilterSpaces(enabled),
        other => {
            return Err(NotecraftrError::InvalidArgument(format!(
                "unknown filter \"{}\" (numbers, letters, special, spaces)",
                other
            )))
        }
    };

    let (next, changed) = text_filter::reduce(&state, action);
    db.persist_text_filter(&next, &changed)?;
    db.save()?;

    println!(
        "Filter {} {}",
        which,
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub fn handle_filter_show(json: bool) -> Result<()> {
    let db = open_database()?;
    let state = db.load_text_filter_state();

    let output = text_filter::filtered_output(&state);
    if json {
        println!("{}", serde_json::json!({ "output": output }));
    } else {
        println!("{}", output);
    }
    Ok(())
}

// ========== Settings ==========

pub fn handle_config_show(json: bool) -> Result<()> {
    let db = open_database()?;
    let settings = db.load_settings();

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        println!("theme: {}", settings.theme.theme);
        println!("color: {}", settings.theme.color);
        println!("addons-enabled: {}", settings.addons_enabled);
        println!(
            "linked-sections-enabled: {}",
            settings.linked_sections_enabled
        );
        println!(
            "auto-copy-on-template-change: {}",
            settings.auto_copy_on_template_change
        );
        println!(
            "auto-copy-on-output-change: {}",
            settings.auto_copy_on_output_change
        );
    }
    Ok(())
}

pub fn handle_config_set(key: String, value: String) -> Result<()> {
    let mut db = open_database()?;
    let current = db.load_settings();

    let action = match key.to_lowercase().as_str() {
        "theme" => SettingsAction::SetTheme(Theme {
            theme: value.clone(),
            ..current.theme.clone()
        }),
        "color" => SettingsAction::SetTheme(Theme {
            color: value.clone(),
            ..current.theme.clone()
        }),
        "addons-enabled" => SettingsAction::SetAddonsEnabled(parse_toggle(&value)?),
        "linked-sections-enabled" => SettingsAction::SetLinkedSectionsEnabled(parse_toggle(&value)?),
        "auto-copy-on-template-change" => {
            SettingsAction::SetAutoCopyOnTemplateChange(parse_toggle(&value)?)
        }
        "auto-copy-on-output-change" => {
            SettingsAction::SetAutoCopyOnOutputChange(parse_toggle(&value)?)
        }
        other => {
            return Err(NotecraftrError::InvalidArgument(format!(
                "unknown setting \"{}\"",
                other
            )))
        }
    };

    let (next, changed) = settings::reduce(&current, action);
    db.persist_settings(&next, &changed)?;
    db.save()?;

    println!("Set {} to {}", key, value);
    Ok(())
}
