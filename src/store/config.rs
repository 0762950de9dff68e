//! Storage location and content limits.

use super::{StoreError, StoreResult};
use std::path::{Path, PathBuf};

/// Directory created under the platform local-data directory.
pub const APP_DIR_NAME: &str = "AppNotes";

/// Database file name inside the storage directory.
pub const DB_FILE_NAME: &str = "notes.db";

/// Maximum number of characters kept from a note's content.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Process-wide store configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    storage_dir: PathBuf,
    max_content_length: usize,
}

impl StoreConfig {
    /// Uses the per-user local data directory of the current platform.
    ///
    /// - Linux: `$XDG_DATA_HOME/AppNotes` or `~/.local/share/AppNotes`
    /// - macOS: `~/Library/Application Support/AppNotes`
    /// - Windows: `%LOCALAPPDATA%\AppNotes`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the platform has no such directory
    /// (e.g. no home directory could be determined).
    pub fn platform_default() -> StoreResult<Self> {
        let base = dirs::data_local_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::in_dir(base.join(APP_DIR_NAME)))
    }

    /// Uses an explicit storage directory.
    ///
    /// The database file is placed directly inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: dir.into(),
            max_content_length: MAX_CONTENT_LENGTH,
        }
    }

    /// Overrides the maximum content length.
    pub fn with_max_content_length(mut self, max: usize) -> Self {
        self.max_content_length = max;
        self
    }

    /// Returns the directory holding the database file.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Returns the full path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.storage_dir.join(DB_FILE_NAME)
    }

    /// Returns the maximum number of characters kept per note.
    pub fn max_content_length(&self) -> usize {
        self.max_content_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_places_db_inside_dir() {
        let config = StoreConfig::in_dir("/data/notes");
        assert_eq!(config.db_path(), PathBuf::from("/data/notes/notes.db"));
        assert_eq!(config.storage_dir(), Path::new("/data/notes"));
    }

    #[test]
    fn default_max_length_is_ten_thousand() {
        let config = StoreConfig::in_dir("/tmp/x");
        assert_eq!(config.max_content_length(), 10_000);
    }

    #[test]
    fn max_length_can_be_overridden() {
        let config = StoreConfig::in_dir("/tmp/x").with_max_content_length(5);
        assert_eq!(config.max_content_length(), 5);
    }

    #[test]
    fn platform_default_uses_fixed_names() {
        // Skipped on hosts without a resolvable home directory
        if let Ok(config) = StoreConfig::platform_default() {
            assert!(config.db_path().ends_with("AppNotes/notes.db"));
            assert!(config.db_path().is_absolute());
        }
    }
}
