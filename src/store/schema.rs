//! SQLite schema for the notes table.

use rusqlite::Connection;

/// Creates the notes table if it does not exist yet.
///
/// Idempotent; run on every connection before the first statement that
/// touches `notes`. `AUTOINCREMENT` keeps ids of deleted notes from being
/// handed out again. The column defaults pad SQLite's millisecond `%f` to
/// microseconds so they have the same width as timestamps the store writes.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now'))
        );",
    )
}
