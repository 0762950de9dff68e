//! Isolated test environment with temp directory.

use super::NotesCommand;
use appnotes::domain::NoteId;
use appnotes::store::{NoteStore, StoreConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary storage directory.
///
/// Config and data lookups of the spawned binary are redirected into the
/// temp directory as well, so the user's real files are never touched.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the storage directory passed with `--dir`
    storage_dir: PathBuf,
    /// Stand-in for `$XDG_CONFIG_HOME`
    config_home: PathBuf,
    /// Stand-in for `$XDG_DATA_HOME`
    data_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            storage_dir: root.join("storage"),
            config_home: root.join("config"),
            data_home: root.join("data"),
            _temp_dir: temp_dir,
        }
    }

    /// Returns the storage directory.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Returns the path of the database file used by `cmd()`.
    pub fn db_path(&self) -> PathBuf {
        self.storage_dir.join("notes.db")
    }

    /// Returns the redirected data home.
    pub fn data_home(&self) -> &Path {
        &self.data_home
    }

    /// Returns a store operating on the same database as `cmd()`.
    pub fn store(&self) -> NoteStore {
        NoteStore::new(StoreConfig::in_dir(&self.storage_dir))
    }

    /// Adds a note directly through the library and returns its id.
    pub fn add_note(&self, content: &str) -> NoteId {
        self.store().create(content).expect("Failed to create test note")
    }

    /// Writes `config.toml` into the redirected config home.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home.join("appnotes");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a command without `--dir`, relying on config and platform defaults.
    pub fn bare_cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .env_path("XDG_CONFIG_HOME", &self.config_home)
            .env_path("XDG_DATA_HOME", &self.data_home)
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        self.bare_cmd().dir(&self.storage_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_paths_live_in_temp_dir() {
        let env = TestEnv::new();
        assert!(env.db_path().starts_with(env.storage_dir()));
        assert!(env.db_path().ends_with("storage/notes.db"));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.add_note("temporary");
            env.storage_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_creates_db() {
        let env = TestEnv::new();
        env.add_note("first");
        assert!(env.db_path().exists());
    }
}
