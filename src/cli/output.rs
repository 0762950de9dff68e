//! Output format types for CLI commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Formats a timestamp for human-readable output.
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Renders one note as it appears in `list` output.
pub fn render_list_entry(note: &Note) -> String {
    format!(
        "--- #{} ---\n{}\n(created: {}, modified: {})",
        note.id(),
        note.content(),
        format_time(note.created_at()),
        format_time(note.updated_at())
    )
}

/// Renders one note as it appears in `show` output.
pub fn render_note(note: &Note) -> String {
    format!(
        "--- #{} ---\n{}\nCreated: {}\nModified: {}",
        note.id(),
        note.content(),
        format_time(note.created_at()),
        format_time(note.updated_at())
    )
}
