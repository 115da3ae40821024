use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::entity::Template;
use crate::error::{NotecraftrError, Result};
use crate::state::{EditorState, NotesState, Settings, Slice, TextFilterState};

const NOTECRAFTR_DIR: &str = ".notecraftr";
const DB_FILE: &str = "db.json";

// Slice keys. These are the names the desktop application has always
// stored under; changing one orphans existing user data.
pub const KEY_TEMPLATES: &str = "notecraftr-templates";
pub const KEY_SECTIONS_FILTER: &str = "notecraftr-sections-filter";
pub const KEY_PREVIEW_VISIBLE: &str = "notecraftr-preview-visible";
pub const KEY_NOTES: &str = "notes-notes";
pub const KEY_THEME: &str = "notecraftr-theme";
pub const KEY_ADDONS_ENABLED: &str = "notecraftr-addons-enabled";
pub const KEY_LINKED_SECTIONS_ENABLED: &str = "notecraftr-linked-sections-enabled";
pub const KEY_AUTO_COPY_ON_TEMPLATE_CHANGE: &str = "notecraftr-auto-copy-on-template-change";
pub const KEY_AUTO_COPY_ON_OUTPUT_CHANGE: &str = "notecraftr-auto-copy-on-output-change";
pub const KEY_TEXTFILTR_TARGET_TEXT: &str = "textfiltr-target-text";
pub const KEY_TEXTFILTR_FILTER_NUMBERS: &str = "textfiltr-filter-numbers";
pub const KEY_TEXTFILTR_FILTER_LETTERS: &str = "textfiltr-filter-letters";
pub const KEY_TEXTFILTR_FILTER_SPECIAL_CHARACTERS: &str = "textfiltr-filter-special-characters";
pub const KEY_TEXTFILTR_FILTER_SPACES: &str = "textfiltr-filter-spaces";
pub const KEY_TEXTFILTR_PREVIEW_VISIBLE: &str = "textfiltr-preview-visible";

/// Durable key-value store backing every state slice.
///
/// One JSON document on disk, one entry per slice key. Reads are
/// tolerant: a missing or malformed value yields the slice's default
/// (with a warning), never an error.
pub struct Database {
    values: Map<String, Value>,
    path: PathBuf,
}

impl Database {
    /// Initialize a new notecraftr workspace, seeded with the default
    /// template.
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(NOTECRAFTR_DIR);

        if dir.exists() {
            return Err(NotecraftrError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        let mut db = Self {
            values: Map::new(),
            path: dir.join(DB_FILE),
        };
        db.set(KEY_TEMPLATES, &vec![Template::new("Default Template", &[])])?;
        db.save()?;

        Ok(db)
    }

    /// Open an existing workspace.
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(NOTECRAFTR_DIR).join(DB_FILE);

        if !path.exists() {
            return Err(NotecraftrError::NotInitialized);
        }

        let raw = fs::read_to_string(&path)?;
        let values = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!(?other, "database is not a JSON object, starting empty");
                Map::new()
            }
            Err(error) => {
                tracing::warn!(%error, "unreadable database, starting empty");
                Map::new()
            }
        };

        Ok(Self { values, path })
    }

    /// Write the document to disk.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&Value::Object(self.values.clone()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Workspace data directory.
    pub fn notecraftr_dir(&self) -> &Path {
        self.path.parent().expect("db file has a parent directory")
    }

    /// Read one slice. Absent or malformed values become `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                tracing::warn!(key, %error, "malformed value in database, using default");
                None
            }
        }
    }

    /// Replace one slice in the in-memory document.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.values.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    // ========== Slice loading ==========

    pub fn load_editor_state(&self) -> EditorState {
        EditorState {
            templates: self.get(KEY_TEMPLATES).unwrap_or_default(),
            sections_filter: self.get(KEY_SECTIONS_FILTER).unwrap_or_default(),
            preview_visible: self.get(KEY_PREVIEW_VISIBLE).unwrap_or_default(),
        }
    }

    pub fn load_notes_state(&self) -> NotesState {
        NotesState {
            notes: self.get(KEY_NOTES).unwrap_or_default(),
        }
    }

    pub fn load_text_filter_state(&self) -> TextFilterState {
        let defaults = TextFilterState::default();
        TextFilterState {
            target_text: self
                .get(KEY_TEXTFILTR_TARGET_TEXT)
                .unwrap_or(defaults.target_text),
            filter_numbers: self.get(KEY_TEXTFILTR_FILTER_NUMBERS).unwrap_or_default(),
            filter_letters: self.get(KEY_TEXTFILTR_FILTER_LETTERS).unwrap_or_default(),
            filter_special_characters: self
                .get(KEY_TEXTFILTR_FILTER_SPECIAL_CHARACTERS)
                .unwrap_or_default(),
            filter_spaces: self.get(KEY_TEXTFILTR_FILTER_SPACES).unwrap_or_default(),
            preview_visible: self.get(KEY_TEXTFILTR_PREVIEW_VISIBLE).unwrap_or_default(),
        }
    }

    pub fn load_settings(&self) -> Settings {
        Settings {
            theme: self.get(KEY_THEME).unwrap_or_default(),
            addons_enabled: self.get(KEY_ADDONS_ENABLED).unwrap_or_default(),
            linked_sections_enabled: self.get(KEY_LINKED_SECTIONS_ENABLED).unwrap_or_default(),
            auto_copy_on_template_change: self
                .get(KEY_AUTO_COPY_ON_TEMPLATE_CHANGE)
                .unwrap_or_default(),
            auto_copy_on_output_change: self
                .get(KEY_AUTO_COPY_ON_OUTPUT_CHANGE)
                .unwrap_or_default(),
        }
    }

    // ========== Slice persistence ==========

    /// Write the editor slices an action reported as changed.
    pub fn persist_editor(&mut self, state: &EditorState, changed: &[Slice]) -> Result<()> {
        for slice in changed {
            match slice {
                Slice::Templates => self.set(KEY_TEMPLATES, &state.templates)?,
                Slice::SectionsFilter => self.set(KEY_SECTIONS_FILTER, &state.sections_filter)?,
                Slice::PreviewVisible => self.set(KEY_PREVIEW_VISIBLE, &state.preview_visible)?,
                _ => {}
            }
        }
        Ok(())
    }

    pub fn persist_notes(&mut self, state: &NotesState, changed: &[Slice]) -> Result<()> {
        if changed.contains(&Slice::Notes) {
            self.set(KEY_NOTES, &state.notes)?;
        }
        Ok(())
    }

    pub fn persist_text_filter(
        &mut self,
        state: &TextFilterState,
        changed: &[Slice],
    ) -> Result<()> {
        if changed.contains(&Slice::TextFilter) {
            self.set(KEY_TEXTFILTR_TARGET_TEXT, &state.target_text)?;
            self.set(KEY_TEXTFILTR_FILTER_NUMBERS, &state.filter_numbers)?;
            self.set(KEY_TEXTFILTR_FILTER_LETTERS, &state.filter_letters)?;
            self.set(
                KEY_TEXTFILTR_FILTER_SPECIAL_CHARACTERS,
                &state.filter_special_characters,
            )?;
            self.set(KEY_TEXTFILTR_FILTER_SPACES, &state.filter_spaces)?;
            self.set(KEY_TEXTFILTR_PREVIEW_VISIBLE, &state.preview_visible)?;
        }
        Ok(())
    }

    pub fn persist_settings(&mut self, settings: &Settings, changed: &[Slice]) -> Result<()> {
        if changed.contains(&Slice::Settings) {
            self.set(KEY_THEME, &settings.theme)?;
            self.set(KEY_ADDONS_ENABLED, &settings.addons_enabled)?;
            self.set(
                KEY_LINKED_SECTIONS_ENABLED,
                &settings.linked_sections_enabled,
            )?;
            self.set(
                KEY_AUTO_COPY_ON_TEMPLATE_CHANGE,
                &settings.auto_copy_on_template_change,
            )?;
            self.set(
                KEY_AUTO_COPY_ON_OUTPUT_CHANGE,
                &settings.auto_copy_on_output_change,
            )?;
        }
        Ok(())
    }
}
