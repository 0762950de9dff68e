//! Sanitized note content.

use std::ffi::OsStr;
use std::fmt;
use thiserror::Error;

/// Errors raised when incoming content cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The content is empty once surrounding whitespace is removed.
    #[error("note content cannot be empty")]
    Empty,

    /// The input is not valid text.
    #[error("note content must be valid UTF-8 text")]
    NotText,
}

/// Note content that has passed sanitization.
///
/// # Sanitization Rules
/// - Surrounding whitespace is trimmed
/// - Anything past `max_len` characters is dropped (overlong input is
///   truncated, never rejected)
/// - The result must be non-empty
///
/// # Examples
///
/// ```
/// use appnotes::domain::{NoteContent, ValidationError};
///
/// let content = NoteContent::new("  Buy milk \n", 10_000).unwrap();
/// assert_eq!(content.as_str(), "Buy milk");
///
/// let short = NoteContent::new("abcdef", 3).unwrap();
/// assert_eq!(short.as_str(), "abc");
///
/// assert_eq!(NoteContent::new("   ", 10_000), Err(ValidationError::Empty));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct NoteContent(String);

impl NoteContent {
    /// Sanitizes raw text into note content.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if nothing remains after trimming.
    pub fn new(raw: &str, max_len: usize) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        // Truncate on a char boundary, counting characters rather than bytes
        let text = match trimmed.char_indices().nth(max_len) {
            Some((byte_idx, _)) => &trimmed[..byte_idx],
            None => trimmed,
        };

        if text.is_empty() {
            return Err(ValidationError::Empty);
        }

        Ok(Self(text.to_string()))
    }

    /// Sanitizes a raw OS string (e.g. a command-line argument).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotText` if the input is not valid UTF-8,
    /// and `ValidationError::Empty` under the same conditions as [`NoteContent::new`].
    pub fn from_os_str(raw: &OsStr, max_len: usize) -> Result<Self, ValidationError> {
        let text = raw.to_str().ok_or(ValidationError::NotText)?;
        Self::new(text, max_len)
    }

    /// Returns the sanitized content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters in the content.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for NoteContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteContent({:?})", self.0)
    }
}
