//! SQLite-backed note storage.

mod config;
mod connection;
mod crud;
mod schema;
mod transaction;


use crate::domain::ValidationError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use config::{APP_DIR_NAME, DB_FILE_NAME, MAX_CONTENT_LENGTH, StoreConfig};

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
///
/// A missing note is not an error: lookups return an empty list and
/// mutations return `false`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The content was rejected by sanitization.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored row could not be mapped to a note.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The platform has no per-user local data directory.
    #[error("could not determine the local data directory")]
    NoDataDir,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// NoteStore Struct
// ===========================================

/// Durable CRUD over notes in a single local SQLite file.
///
/// Holds no connection: each operation opens its own, applies the safety
/// settings, runs, and closes it again.
#[derive(Debug, Clone)]
pub struct NoteStore {
    config: StoreConfig,
    db_path: PathBuf,
}

impl NoteStore {
    /// Creates a store for the given configuration.
    ///
    /// Touches nothing on disk; the directory and database file are created
    /// by the first operation.
    pub fn new(config: StoreConfig) -> Self {
        let db_path = config.db_path();
        Self { config, db_path }
    }

    /// Returns the path of the database file, for backup or inspection.
    pub fn storage_path(&self) -> &Path {
        &self.db_path
    }

    /// Returns the configuration the store was created with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
