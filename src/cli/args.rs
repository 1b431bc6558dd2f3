// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the book-tracking server (overrides the config file)
    #[arg(short, long, value_name = "URL", global = true)]
    pub server: Option<String>,

    /// Path to config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, add, edit, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List books, optionally filtered by a search query
    List {
        /// Search term; the server filters over title, author, and review
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Output the list as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Render the list as an HTML page and open it in the browser
        #[arg(long)]
        open: bool,
    },

    /// Add a new book
    Add {
        #[command(flatten)]
        fields: BookFields,
    },

    /// Edit an existing book; omitted flags keep the stored values
    Edit {
        /// Book ID to edit
        #[arg(value_name = "BOOK_ID")]
        book_id: i64,

        #[command(flatten)]
        fields: BookFields,
    },

    /// Delete a book
    Delete {
        /// Book ID to delete
        #[arg(value_name = "BOOK_ID")]
        book_id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// The seven form fields, shared by add and edit.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct BookFields {
    /// Book title (required by the server)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Subtitle
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Author (required by the server)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Publisher
    #[arg(short, long)]
    pub publisher: Option<String>,

    /// Publication date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub publication_date: Option<String>,

    /// Date the book was read (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub read_date: Option<String>,

    /// Personal review
    #[arg(short, long)]
    pub review: Option<String>,
}
