//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::NoteId;
use output::OutputFormat;

/// appnotes - quick notes saved to a local SQLite database
#[derive(Parser, Debug)]
#[command(name = "appnotes", version, about, long_about = None)]
pub struct Cli {
    /// Storage directory (overrides config file and platform default)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new note
    Add(AddArgs),

    /// List all notes, most recently modified first
    List(ListArgs),

    /// Show a note by id
    Show(ShowArgs),

    /// Replace a note's text
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Print the database location (for backups)
    Path,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note text (multiple words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<OsString>,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id
    pub id: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id
    pub id: NoteId,

    /// New note text (multiple words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<OsString>,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note id
    pub id: NoteId,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
