//! Core types: Note, NoteId, NoteContent

mod content;
mod note;
mod note_id;

pub use content::{NoteContent, ValidationError};
pub use note::Note;
pub use note_id::{NoteId, ParseNoteIdError};
