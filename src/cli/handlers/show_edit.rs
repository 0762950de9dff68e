//! Show and Edit command handlers.

use anyhow::{Context, Result, bail};

use super::note_content;
use crate::cli::output::{Output, OutputFormat, render_note};
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::Note;
use crate::store::NoteStore;

/// Looks up a single note, treating absence as an error.
pub(crate) fn find_note(args: &ShowArgs, store: &NoteStore) -> Result<Note> {
    let notes = store
        .read(Some(args.id))
        .with_context(|| format!("failed to read note #{}", args.id))?;

    match notes.into_iter().next() {
        Some(note) => Ok(note),
        None => bail!("note #{} not found", args.id),
    }
}

pub fn handle_show(args: &ShowArgs, store: &NoteStore) -> Result<()> {
    let note = find_note(args, store)?;

    match args.format {
        OutputFormat::Human => println!("{}", render_note(&note)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(note))?);
        }
    }

    Ok(())
}

/// Replaces a note's text, treating a missing note as an error.
pub(crate) fn edit_note(args: &EditArgs, store: &NoteStore) -> Result<()> {
    let content = note_content(&args.text, store.config().max_content_length())?;
    let updated = store
        .update(args.id, content.as_str())
        .with_context(|| format!("failed to update note #{}", args.id))?;

    if !updated {
        bail!("note #{} not found", args.id);
    }
    Ok(())
}

pub fn handle_edit(args: &EditArgs, store: &NoteStore) -> Result<()> {
    edit_note(args, store)?;
    println!("Updated note #{}.", args.id);
    Ok(())
}
