//! Add command handler.

use anyhow::{Context, Result};

use super::note_content;
use crate::cli::AddArgs;
use crate::domain::NoteId;
use crate::store::NoteStore;

/// Saves the joined words as a new note and returns its id.
pub(crate) fn add_note(args: &AddArgs, store: &NoteStore) -> Result<NoteId> {
    let content = note_content(&args.text, store.config().max_content_length())?;
    store.create(content.as_str()).context("failed to save note")
}

pub fn handle_add(args: &AddArgs, store: &NoteStore) -> Result<()> {
    let id = add_note(args, store)?;
    println!("Saved note #{}.", id);
    Ok(())
}
