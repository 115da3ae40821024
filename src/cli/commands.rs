use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notecraftr")]
#[command(version, about = "Template-based note composition from the command line")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a notecraftr workspace in the current directory
    Init,

    /// Manage templates
    Template(TemplateCommand),

    /// Manage sections of a template
    Section(SectionCommand),

    /// Print the composed output of the active template
    Output {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or hide the output preview
    Preview {
        /// "on" or "off"
        state: String,
    },

    /// Manage floating sticky notes
    Note(NoteCommand),

    /// Text filter add-on
    Filter(FilterCommand),

    /// Show or change application settings
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub action: TemplateAction,
}

#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Add a new template and make it active
    Add {
        /// Template title
        title: String,
    },

    /// List templates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Duplicate a template
    Duplicate {
        /// Template id
        id: i32,
    },

    /// Delete a template
    Delete {
        /// Template id
        id: i32,
    },

    /// Make a template the active one
    Activate {
        /// Template id
        id: i32,
    },

    /// Rename a template
    Rename {
        /// Template id
        id: i32,

        /// New title
        title: String,
    },
}

#[derive(Args, Debug)]
pub struct SectionCommand {
    #[command(subcommand)]
    pub action: SectionAction,
}

#[derive(Subcommand, Debug)]
pub enum SectionAction {
    /// Add a new section to a template (default: the active one)
    Add {
        /// Owning template id
        #[arg(long)]
        template: Option<i32>,
    },

    /// List sections (default: the active template's, honoring the
    /// sections filter)
    List {
        /// Template id to list instead of the active one
        #[arg(long)]
        template: Option<i32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of a section
    Update {
        /// Section id
        id: i32,

        /// Owning template id (default: the active template)
        #[arg(long)]
        template: Option<i32>,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// Section type (single, multiple, input, date)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Prefix prepended to the section value
        #[arg(long)]
        prefix: Option<String>,

        /// Suffix appended to the section value
        #[arg(long)]
        suffix: Option<String>,

        /// Separator between multiple values
        #[arg(long)]
        separator: Option<String>,

        /// Selectable option (can be specified multiple times)
        #[arg(long = "option", short = 'o')]
        options: Vec<String>,

        /// Value for single/input sections
        #[arg(long)]
        value: Option<String>,

        /// Selected value for multiple sections (can be specified
        /// multiple times)
        #[arg(long = "selected")]
        selected: Vec<String>,

        /// Date value (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Date format preset, or "Custom"
        #[arg(long)]
        date_format: Option<String>,

        /// Pattern used when the format is "Custom"
        #[arg(long)]
        custom_date_format: Option<String>,

        /// Whether the section contributes to output ("on" or "off")
        #[arg(long)]
        active: Option<String>,
    },

    /// Delete a section
    Delete {
        /// Section id
        id: i32,

        /// Owning template id (default: the active template)
        #[arg(long)]
        template: Option<i32>,
    },

    /// Duplicate a section within its template
    Duplicate {
        /// Section id
        id: i32,

        /// Owning template id (default: the active template)
        #[arg(long)]
        template: Option<i32>,
    },

    /// Create a section linked to an existing one
    Link {
        /// Source section id, in the active template
        id: i32,
    },

    /// Toggle every section of a template ("on" or "off")
    SelectAll {
        /// "on" or "off"
        state: String,

        /// Template id (default: the active template)
        #[arg(long)]
        template: Option<i32>,
    },

    /// Set the sections filter text (empty to clear)
    Filter {
        /// Filter text
        #[arg(default_value = "")]
        text: String,
    },
}

#[derive(Args, Debug)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub action: NoteAction,
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Add a new empty note
    Add,

    /// List notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a note
    Update {
        /// Note id
        id: i32,

        /// New text
        #[arg(long)]
        text: Option<String>,

        /// Whether a floating window shows this note ("on" or "off")
        #[arg(long)]
        opened: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: i32,
    },

    /// Duplicate a note
    Duplicate {
        /// Note id
        id: i32,
    },
}

#[derive(Args, Debug)]
pub struct FilterCommand {
    #[command(subcommand)]
    pub action: FilterAction,
}

#[derive(Subcommand, Debug)]
pub enum FilterAction {
    /// Set the text the filters apply to
    Text {
        /// Target text
        value: String,
    },

    /// Toggle a filter (numbers, letters, special, spaces)
    Toggle {
        /// Filter name
        which: String,

        /// "on" or "off"
        state: String,
    },

    /// Print the filtered text
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a setting (theme, color, addons-enabled,
    /// linked-sections-enabled, auto-copy-on-template-change,
    /// auto-copy-on-output-change)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },
}
