use clap::Parser;
use notecraftr::cli::{
    handle_config_set, handle_config_show, handle_filter_show, handle_filter_text,
    handle_filter_toggle, handle_init, handle_note_add, handle_note_delete, handle_note_duplicate,
    handle_note_list, handle_note_update, handle_output, handle_preview, handle_section_add,
    handle_section_delete, handle_section_duplicate, handle_section_filter, handle_section_link,
    handle_section_list, handle_section_select_all, handle_section_update, handle_template_activate,
    handle_template_add, handle_template_delete, handle_template_duplicate, handle_template_list,
    handle_template_rename, Cli, Commands, ConfigAction, FilterAction, NoteAction, SectionAction,
    TemplateAction,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Template(template) => match template.action {
            TemplateAction::Add { title } => handle_template_add(title),
            TemplateAction::List { json } => handle_template_list(json),
            TemplateAction::Duplicate { id } => handle_template_duplicate(id),
            TemplateAction::Delete { id } => handle_template_delete(id),
            TemplateAction::Activate { id } => handle_template_activate(id),
            TemplateAction::Rename { id, title } => handle_template_rename(id, title),
        },
        Commands::Section(section) => match section.action {
            SectionAction::Add { template } => handle_section_add(template),
            SectionAction::List { template, json } => handle_section_list(template, json),
            SectionAction::Update {
                id,
                template,
                title,
                kind,
                prefix,
                suffix,
                separator,
                options,
                value,
                selected,
                date,
                date_format,
                custom_date_format,
                active,
            } => handle_section_update(
                id,
                template,
                title,
                kind,
                prefix,
                suffix,
                separator,
                options,
                value,
                selected,
                date,
                date_format,
                custom_date_format,
                active,
            ),
            SectionAction::Delete { id, template } => handle_section_delete(id, template),
            SectionAction::Duplicate { id, template } => handle_section_duplicate(id, template),
            SectionAction::Link { id } => handle_section_link(id),
            SectionAction::SelectAll { state, template } => {
                handle_section_select_all(state, template)
            }
            SectionAction::Filter { text } => handle_section_filter(text),
        },
        Commands::Output { json } => handle_output(json),
        Commands::Preview { state } => handle_preview(state),
        Commands::Note(note) => match note.action {
            NoteAction::Add => handle_note_add(),
            NoteAction::List { json } => handle_note_list(json),
            NoteAction::Update { id, text, opened } => handle_note_update(id, text, opened),
            NoteAction::Delete { id } => handle_note_delete(id),
            NoteAction::Duplicate { id } => handle_note_duplicate(id),
        },
        Commands::Filter(filter) => match filter.action {
            FilterAction::Text { value } => handle_filter_text(value),
            FilterAction::Toggle { which, state } => handle_filter_toggle(which, state),
            FilterAction::Show { json } => handle_filter_show(json),
        },
        Commands::Config(config) => match config.action {
            ConfigAction::Show { json } => handle_config_show(json),
            ConfigAction::Set { key, value } => handle_config_set(key, value),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
