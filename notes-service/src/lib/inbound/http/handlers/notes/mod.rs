use serde::Deserialize;
use serde::Serialize;

use super::NoteData;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteDraft;
use crate::domain::note::models::NoteTitle;

pub mod create_note;
pub mod delete_note;
pub mod get_note;
pub mod list_notes;
pub mod update_note;

pub use create_note::create_note;
pub use delete_note::delete_note;
pub use get_note::get_note;
pub use list_notes::list_notes;
pub use update_note::update_note;

/// Body shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteRequest {
    title: Option<String>,
    content: Option<String>,
}

impl NoteRequest {
    fn try_into_draft(self) -> Result<NoteDraft, NoteError> {
        let title = NoteTitle::new(self.title.unwrap_or_default())?;
        Ok(NoteDraft::new(title, self.content))
    }
}

/// `{message, note}`, returned by every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteMutationResponseData {
    pub message: String,
    pub note: NoteData,
}
