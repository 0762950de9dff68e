//! Store-assigned integer note identifier with parsing and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique, positive identifier for notes.
///
/// Identifiers are assigned by the store on insertion and never reused,
/// even after the note they named has been deleted.
///
/// # Examples
///
/// ```
/// use appnotes::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
///
/// assert!("0".parse::<NoteId>().is_err());
/// assert!("abc".parse::<NoteId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct NoteId(i64);

impl NoteId {
    /// Creates a NoteId from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteIdError` if the value is zero or negative.
    pub fn new(value: i64) -> Result<Self, ParseNoteIdError> {
        if value <= 0 {
            return Err(ParseNoteIdError {
                value: value.to_string(),
                reason: "id must be a positive integer".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| ParseNoteIdError {
            value: s.to_string(),
            reason: "id must be a number".to_string(),
        })?;
        Self::new(value).map_err(|e| ParseNoteIdError {
            value: s.to_string(),
            reason: e.reason,
        })
    }
}

impl TryFrom<i64> for NoteId {
    type Error = ParseNoteIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NoteId> for i64 {
    fn from(id: NoteId) -> Self {
        id.0
    }
}
