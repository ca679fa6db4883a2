use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use super::errors::NoteError;
use super::models::Note;
use super::models::NoteDraft;
use super::models::NoteId;
use crate::domain::user::models::UserId;

/// Port for note domain service operations.
///
/// Every operation is scoped to `owner`, the identity resolved from the
/// caller's verified token.
#[async_trait]
pub trait NoteServicePort: Send + Sync + 'static {
    /// Create a note owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_note(&self, owner: UserId, draft: NoteDraft) -> Result<Note, NoteError>;

    /// List the owner's notes, most recently updated first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>, NoteError>;

    /// Retrieve one of the owner's notes.
    ///
    /// # Errors
    /// * `NotFound` - No such note, or it belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_note(&self, owner: UserId, id: NoteId) -> Result<Note, NoteError>;

    /// Replace title and content of one of the owner's notes.
    ///
    /// # Errors
    /// * `NotFound` - No such note, or it belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_note(
        &self,
        owner: UserId,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, NoteError>;

    /// Delete one of the owner's notes and return it.
    ///
    /// # Errors
    /// * `NotFound` - No such note, or it belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_note(&self, owner: UserId, id: NoteId) -> Result<Note, NoteError>;
}

/// Repository port for note persistence operations.
///
/// Implementations must apply the owner and id filters inside the same
/// statement that reads, updates or deletes the row.
#[async_trait]
pub trait NoteRepository: Send + Sync + 'static {
    /// Persist a new note.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, note: Note) -> Result<Note, NoteError>;

    /// All notes of `owner`, ordered by `updated_at` descending, ties in
    /// insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, NoteError>;

    /// Note matching both `id` and `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find(&self, owner: UserId, id: NoteId) -> Result<Option<Note>, NoteError>;

    /// Conditionally overwrite title and content of the note matching both
    /// `id` and `owner`. `updated_at` becomes the later of `now` and one
    /// microsecond past its previous value. `None` when no row matched.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        owner: UserId,
        id: NoteId,
        draft: NoteDraft,
        now: DateTime<Utc>,
    ) -> Result<Option<Note>, NoteError>;

    /// Conditionally delete the note matching both `id` and `owner`,
    /// returning the removed row. `None` when no row matched.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner: UserId, id: NoteId) -> Result<Option<Note>, NoteError>;
}
