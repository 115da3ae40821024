use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotecraftrError {
    #[error("Not in a notecraftr workspace. Run 'notecraftr init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .notecraftr/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Template not found: {0}")]
    TemplateNotFound(i32),

    #[error("Section not found: {0}")]
    SectionNotFound(i32),

    #[error("Note not found: {0}")]
    NoteNotFound(i32),

    #[error("No active template")]
    NoActiveTemplate,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotecraftrError>;
