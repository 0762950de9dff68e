//! Create, read, update and delete operations for NoteStore.

use super::transaction::Transaction;
use super::{NoteStore, StoreError, StoreResult};
use crate::domain::{Note, NoteContent, NoteId};
use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use rusqlite::{Connection, Params, params};

const SELECT_NOTE: &str = "SELECT id, content, created_at, updated_at FROM notes";

impl NoteStore {
    /// Stores a new note and returns its id.
    ///
    /// The content is trimmed and truncated to the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if nothing remains after trimming;
    /// no row is written in that case.
    pub fn create(&self, content: &str) -> StoreResult<NoteId> {
        let content = NoteContent::new(content, self.config.max_content_length())?;

        self.with_connection(|conn| {
            let now = timestamp_now();
            let tx = Transaction::begin(conn)?;
            tx.execute(
                "INSERT INTO notes (content, created_at, updated_at) VALUES (?1, ?2, ?2)",
                params![content.as_str(), now],
            )?;
            let raw_id = tx.conn().last_insert_rowid();
            tx.commit()?;

            let id = NoteId::new(raw_id).map_err(|e| StoreError::InvalidRecord(e.to_string()))?;
            info!(
                "event=note_create id={} chars={}",
                id,
                content.char_count()
            );
            Ok(id)
        })
    }

    /// Reads one note by id, or every note when `id` is `None`.
    ///
    /// All notes come back most recently modified first, with the higher id
    /// first among equal timestamps. A missing id yields an empty list.
    pub fn read(&self, id: Option<NoteId>) -> StoreResult<Vec<Note>> {
        self.with_connection(|conn| match id {
            Some(id) => query_notes(conn, &format!("{SELECT_NOTE} WHERE id = ?1"), [id.get()]),
            None => query_notes(
                conn,
                &format!("{SELECT_NOTE} ORDER BY updated_at DESC, id DESC"),
                [],
            ),
        })
    }

    /// Replaces a note's content and refreshes its modification time.
    ///
    /// Returns `false`, writing nothing, if no note has this id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` under the same conditions as [`NoteStore::create`].
    pub fn update(&self, id: NoteId, content: &str) -> StoreResult<bool> {
        let content = NoteContent::new(content, self.config.max_content_length())?;

        self.with_connection(|conn| {
            let now = timestamp_now();
            let tx = Transaction::begin(conn)?;
            // updated_at never moves backwards, even if the clock does
            let rows = tx.execute(
                "UPDATE notes
                 SET content = ?1, updated_at = MAX(?2, updated_at, created_at)
                 WHERE id = ?3",
                params![content.as_str(), now, id.get()],
            )?;
            tx.commit()?;

            if rows > 0 {
                info!(
                    "event=note_update id={} chars={}",
                    id,
                    content.char_count()
                );
            }
            Ok(rows > 0)
        })
    }

    /// Permanently removes a note.
    ///
    /// Returns `true` if a note was removed, `false` if none had this id.
    pub fn delete(&self, id: NoteId) -> StoreResult<bool> {
        self.with_connection(|conn| {
            let tx = Transaction::begin(conn)?;
            let rows = tx.execute("DELETE FROM notes WHERE id = ?1", [id.get()])?;
            tx.commit()?;

            if rows > 0 {
                info!("event=note_delete id={}", id);
            }
            Ok(rows > 0)
        })
    }
}

// ===========================================
// Row Mapping
// ===========================================

/// A `notes` row in fixed column order: id, content, created_at, updated_at.
struct NoteRow {
    id: i64,
    content: String,
    created_at: String,
    updated_at: String,
}

impl NoteRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            created_at: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }

    fn into_note(self) -> StoreResult<Note> {
        let id = NoteId::new(self.id).map_err(|e| StoreError::InvalidRecord(e.to_string()))?;
        let created_at = parse_timestamp(&self.created_at, "created_at")?;
        let updated_at = parse_timestamp(&self.updated_at, "updated_at")?;
        Ok(Note::new(id, self.content, created_at, updated_at))
    }
}

fn query_notes<P: Params>(conn: &Connection, sql: &str, params: P) -> StoreResult<Vec<Note>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, NoteRow::from_row)?;

    let notes = rows
        .map(|row| -> StoreResult<Note> { row?.into_note() })
        .collect::<StoreResult<Vec<_>>>()?;
    Ok(notes)
}

// ===========================================
// Timestamps
// ===========================================

/// Current time as fixed-width RFC 3339 text, so that string order matches
/// chronological order in SQL comparisons.
fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str, column: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidRecord(format!("invalid {column} timestamp '{raw}': {e}")))
}
