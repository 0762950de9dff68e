//! Note record returned by the store.

use super::NoteId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as persisted by the store.
///
/// Values are owned copies of the stored row; mutating one has no effect on
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a Note from its stored fields.
    pub fn new(
        id: NoteId,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
            updated_at,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last modified.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true if the note was modified after it was created.
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}
