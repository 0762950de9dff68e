//! RAII-based write transaction for a single store operation.

use super::StoreResult;
use rusqlite::{Connection, Params};

/// A write transaction with automatic rollback.
///
/// Started with `BEGIN IMMEDIATE` so the write lock is taken up front.
/// Dropping the transaction without calling `commit()` rolls it back.
pub(crate) struct Transaction<'a> {
    conn: &'a Connection,
    finished: bool,
}

impl<'a> Transaction<'a> {
    /// Begins a new immediate transaction on the connection.
    pub(crate) fn begin(conn: &'a Connection) -> StoreResult<Self> {
        conn.execute_batch("BEGIN IMMEDIATE")?;
        Ok(Self {
            conn,
            finished: false,
        })
    }

    /// Returns a reference to the underlying connection.
    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    /// Executes a SQL statement within the transaction.
    pub(crate) fn execute(&self, sql: &str, params: impl Params) -> StoreResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Commits the transaction.
    pub(crate) fn commit(mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // Errors are ignored since we're in drop
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}
