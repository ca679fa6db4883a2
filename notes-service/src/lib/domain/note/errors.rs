use thiserror::Error;

/// Error type for NoteId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for NoteTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteTitleError {
    #[error("Title is required")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for all note-related operations
#[derive(Debug, Clone, Error)]
pub enum NoteError {
    #[error("{0}")]
    InvalidTitle(#[from] NoteTitleError),

    /// Absent, or owned by someone else. The two are never told apart.
    #[error("Note not found")]
    NotFound,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for NoteError {
    fn from(err: anyhow::Error) -> Self {
        NoteError::Unknown(err.to_string())
    }
}
