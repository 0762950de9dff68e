//! Connection management for NoteStore.
//!
//! Every store operation gets its own short-lived connection. Each one is
//! opened with the same safety settings:
//!
//! | setting           | value     |
//! |-------------------|-----------|
//! | `foreign_keys`    | `ON`      |
//! | `journal_mode`    | `WAL`     |
//! | `synchronous`     | `EXTRA`   |
//! | `temp_store`      | `MEMORY`  |
//! | extension loading | disabled  |

use super::schema::create_schema;
use super::{NoteStore, StoreError, StoreResult};
use log::{debug, warn};
use rusqlite::Connection;
use std::fs;

impl NoteStore {
    // ===========================================
    // Scoped Acquisition
    // ===========================================

    /// Runs `f` with a freshly opened, configured connection.
    ///
    /// The connection is closed before returning, whether `f` succeeded or not.
    pub(crate) fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let conn = self.open_connection()?;
        let result = f(&conn);

        if let Err((_conn, err)) = conn.close() {
            // The handle is released when `_conn` drops
            warn!(
                "event=db_close status=error path={} error={}",
                self.db_path.display(),
                err
            );
        } else {
            debug!("event=db_close status=ok");
        }

        result
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens the database file, creating the storage directory if needed,
    /// then applies the safety settings and ensures the schema exists.
    fn open_connection(&self) -> StoreResult<Connection> {
        let dir = self.config.storage_dir();
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| StoreError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
            debug!("event=storage_dir_created path={}", dir.display());
        }

        let conn = Connection::open(&self.db_path)?;
        configure(&conn)?;
        create_schema(&conn)?;
        debug!("event=db_open status=ok path={}", self.db_path.display());
        Ok(conn)
    }
}

/// Applies the fixed safety settings to a connection.
pub(crate) fn configure(conn: &Connection) -> StoreResult<()> {
    conn.load_extension_disable()?;

    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA synchronous = EXTRA;
         PRAGMA temp_store = MEMORY;",
    )?;

    let mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    if !mode.eq_ignore_ascii_case("wal") {
        warn!("event=db_configure journal_mode={} expected=wal", mode);
    }

    Ok(())
}
