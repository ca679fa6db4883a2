use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::note::errors::NoteIdError;
use crate::domain::note::errors::NoteTitleError;
use crate::domain::user::models::UserId;

/// Note unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Generate a new random note ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a note ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, NoteIdError> {
        Uuid::parse_str(s)
            .map(NoteId)
            .map_err(|e| NoteIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Note aggregate.
///
/// `owner` is fixed at creation; no operation changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub owner: UserId,
    pub title: NoteTitle,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Note title value object.
///
/// Non-empty and within the 255 character column limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTitle(String);

impl NoteTitle {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Title is empty
    /// * `TooLong` - Title exceeds 255 characters
    pub fn new(title: String) -> Result<Self, NoteTitleError> {
        if title.is_empty() {
            return Err(NoteTitleError::Empty);
        }

        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NoteTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Title and content written by create and update.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: NoteTitle,
    pub content: String,
}

impl NoteDraft {
    /// Missing content is stored as an empty string.
    pub fn new(title: NoteTitle, content: Option<String>) -> Self {
        Self {
            title,
            content: content.unwrap_or_default(),
        }
    }
}
