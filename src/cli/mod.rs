mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, ConfigAction, ConfigCommand, FilterAction, FilterCommand, NoteAction,
    NoteCommand, SectionAction, SectionCommand, TemplateAction, TemplateCommand,
};
pub use handlers::{
    handle_config_set, handle_config_show, handle_filter_show, handle_filter_text,
    handle_filter_toggle, handle_init, handle_note_add, handle_note_delete, handle_note_duplicate,
    handle_note_list, handle_note_update, handle_output, handle_preview, handle_section_add,
    handle_section_delete, handle_section_duplicate, handle_section_filter, handle_section_link,
    handle_section_list, handle_section_select_all, handle_section_update, handle_template_activate,
    handle_template_add, handle_template_delete, handle_template_duplicate, handle_template_list,
    handle_template_rename,
};
