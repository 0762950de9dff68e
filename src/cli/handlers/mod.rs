//! Command handlers for the CLI.

mod add;
mod completions;
mod delete;
mod list;
mod show_edit;


use std::ffi::OsString;

use crate::domain::{NoteContent, ValidationError};
use crate::store::NoteStore;

// Re-export public items
pub use add::handle_add;
pub use completions::handle_completions;
pub use delete::handle_delete;
pub use list::handle_list;
pub use show_edit::{handle_edit, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Joins command-line words with single spaces and sanitizes the result.
///
/// Fails with `ValidationError::NotText` if any word is not valid UTF-8.
pub(crate) fn note_content(
    words: &[OsString],
    max_len: usize,
) -> Result<NoteContent, ValidationError> {
    let mut joined = OsString::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            joined.push(" ");
        }
        joined.push(word);
    }
    NoteContent::from_os_str(&joined, max_len)
}

/// Prints the database location.
pub fn handle_path(store: &NoteStore) {
    println!("Database: {}", store.storage_path().display());
}
