pub mod editor;
pub mod notes;
pub mod settings;
pub mod text_filter;

pub use editor::{EditorAction, EditorState};
pub use notes::{NotesAction, NotesState};
pub use settings::{Settings, SettingsAction, Theme};
pub use text_filter::{TextFilterAction, TextFilterState};

/// Persisted state slices.
///
/// Every reduction returns the list of slices it changed, and the
/// storage layer writes exactly those. A no-op reduction reports none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Templates,
    SectionsFilter,
    PreviewVisible,
    Notes,
    TextFilter,
    Settings,
}
