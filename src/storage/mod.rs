mod database;

pub use database::{
    Database, KEY_ADDONS_ENABLED, KEY_AUTO_COPY_ON_OUTPUT_CHANGE, KEY_AUTO_COPY_ON_TEMPLATE_CHANGE,
    KEY_LINKED_SECTIONS_ENABLED, KEY_NOTES, KEY_PREVIEW_VISIBLE, KEY_SECTIONS_FILTER,
    KEY_TEMPLATES, KEY_TEXTFILTR_FILTER_LETTERS, KEY_TEXTFILTR_FILTER_NUMBERS,
    KEY_TEXTFILTR_FILTER_SPACES, KEY_TEXTFILTR_FILTER_SPECIAL_CHARACTERS,
    KEY_TEXTFILTR_PREVIEW_VISIBLE, KEY_TEXTFILTR_TARGET_TEXT, KEY_THEME,
};
