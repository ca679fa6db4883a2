use std::sync::Arc;

use async_trait::async_trait;
use chrono::SubsecRound;
use chrono::Utc;

use super::errors::NoteError;
use super::models::Note;
use super::models::NoteDraft;
use super::models::NoteId;
use super::ports::NoteRepository;
use super::ports::NoteServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of NoteServicePort.
///
/// Generic over repository for testability.
pub struct NoteService<NR>
where
    NR: NoteRepository,
{
    note_repository: Arc<NR>,
}

impl<NR> NoteService<NR>
where
    NR: NoteRepository,
{
    pub fn new(note_repository: Arc<NR>) -> Self {
        Self { note_repository }
    }
}

#[async_trait]
impl<NR> NoteServicePort for NoteService<NR>
where
    NR: NoteRepository,
{
    async fn create_note(&self, owner: UserId, draft: NoteDraft) -> Result<Note, NoteError> {
        // Stored at microsecond precision, matching the timestamp column.
        let now = Utc::now().trunc_subsecs(6);

        let note = Note {
            id: NoteId::new(),
            owner,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };

        let note = self.note_repository.create(note).await?;
        tracing::info!(note_id = %note.id, owner = %owner, "Note created");

        Ok(note)
    }

    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>, NoteError> {
        self.note_repository.list_by_owner(owner).await
    }

    async fn get_note(&self, owner: UserId, id: NoteId) -> Result<Note, NoteError> {
        self.note_repository
            .find(owner, id)
            .await?
            .ok_or(NoteError::NotFound)
    }

    async fn update_note(
        &self,
        owner: UserId,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, NoteError> {
        let now = Utc::now().trunc_subsecs(6);

        let note = self
            .note_repository
            .update(owner, id, draft, now)
            .await?
            .ok_or(NoteError::NotFound)?;
        tracing::info!(note_id = %note.id, owner = %owner, "Note updated");

        Ok(note)
    }

    async fn delete_note(&self, owner: UserId, id: NoteId) -> Result<Note, NoteError> {
        let note = self
            .note_repository
            .delete(owner, id)
            .await?
            .ok_or(NoteError::NotFound)?;
        tracing::info!(note_id = %note.id, owner = %owner, "Note deleted");

        Ok(note)
    }
}
