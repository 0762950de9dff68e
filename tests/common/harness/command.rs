//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `appnotes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NotesCommand {
    args: Vec<OsString>,
    envs: Vec<(String, PathBuf)>,
}

impl NotesCommand {
    /// Creates a new command for the `appnotes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--dir` option to specify the storage directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".into());
        self.args.push(path.as_os_str().to_owned());
        self
    }

    /// Sets an environment variable pointing at a path.
    pub fn env_path(mut self, key: &str, path: &Path) -> Self {
        self.envs.push((key.to_string(), path.to_path_buf()));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| OsString::from(s.as_ref())));
        self
    }

    /// Adds a single raw argument, which need not be valid UTF-8.
    pub fn arg_os(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("appnotes").expect("Failed to find appnotes binary");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command with note text.
    pub fn add(self, text: &str) -> Self {
        self.args(["add", text])
    }

    /// Configures for the `list` command.
    pub fn list(self) -> Self {
        self.args(["list"])
    }

    /// Configures for the `show` command with an ID.
    pub fn show(self, id: &str) -> Self {
        self.args(["show", id])
    }

    /// Configures for the `edit` command with an ID and new text.
    pub fn edit(self, id: &str, text: &str) -> Self {
        self.args(["edit", id, text])
    }

    /// Configures for the `delete` command with an ID.
    pub fn delete(self, id: &str) -> Self {
        self.args(["delete", id])
    }

    /// Configures for the `path` command.
    pub fn path(self) -> Self {
        self.args(["path"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = NotesCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1].as_os_str(), temp.path().as_os_str());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotesCommand::new().list().format_json();
        let args = cmd.get_args();
        assert_eq!(args, ["list", "--format", "json"]);
    }
}
