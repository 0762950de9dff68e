//! Delete command handler.

use anyhow::{Context, Result, bail};

use crate::cli::DeleteArgs;
use crate::store::NoteStore;

pub fn handle_delete(args: &DeleteArgs, store: &NoteStore) -> Result<()> {
    let deleted = store
        .delete(args.id)
        .with_context(|| format!("failed to delete note #{}", args.id))?;

    if !deleted {
        bail!("note #{} not found", args.id);
    }

    println!("Deleted note #{}.", args.id);
    Ok(())
}
