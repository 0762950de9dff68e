//! List command handler.

use anyhow::{Context, Result};

use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat, render_list_entry};
use crate::store::NoteStore;

pub fn handle_list(args: &ListArgs, store: &NoteStore) -> Result<()> {
    let notes = store.read(None).context("failed to list notes")?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes saved.");
                return Ok(());
            }

            for note in &notes {
                println!();
                println!("{}", render_list_entry(note));
            }
        }
        OutputFormat::Json => {
            let output = Output::new(notes);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
