use clap::{ArgAction, Parser, Subcommand};
use noteboard::model::NoteId;

#[derive(Parser, Debug)]
#[command(name = "noteboard", bin_name = "noteboard", version)]
#[command(about = "Create, edit and delete notes on a REST note server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes endpoint, overrides the configured base-url
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub base_url: Option<String>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a new note
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Title of the note
        title: String,

        /// Content of the note
        content: String,
    },

    /// Edit an existing note
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Id of the note
        id: NoteId,

        /// New title (keeps the current one if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New content (keeps the current one if omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Ids of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Open an interactive board session
    #[command(alias = "i", display_order = 5)]
    Board,

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Configuration key (e.g., base-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
