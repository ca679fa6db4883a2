use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteDraft;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::NoteTitle;
use crate::domain::note::ports::NoteRepository;
use crate::domain::user::models::UserId;

/// Notes table adapter.
///
/// Reads, updates and deletes are each a single statement filtered on
/// `id AND user_id`, so ownership is checked in the same step that touches
/// the row.
pub struct PostgresNoteRepository {
    pool: PgPool,
}

impl PostgresNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NoteRow> for Note {
    type Error = NoteError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        Ok(Note {
            id: NoteId(row.id),
            owner: UserId(row.user_id),
            title: NoteTitle::new(row.title)?,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> NoteError {
    NoteError::DatabaseError(e.to_string())
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn create(&self, note: Note) -> Result<Note, NoteError> {
        sqlx::query(
            r#"
            INSERT INTO notes (id, user_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(note.id.0)
        .bind(note.owner.0)
        .bind(note.title.as_str())
        .bind(&note.content)
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(note)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, NoteError> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE user_id = $1
            ORDER BY updated_at DESC, seq ASC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Note::try_from).collect()
    }

    async fn find(&self, owner: UserId, id: NoteId) -> Result<Option<Note>, NoteError> {
        sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Note::try_from)
        .transpose()
    }

    async fn update(
        &self,
        owner: UserId,
        id: NoteId,
        draft: NoteDraft,
        now: DateTime<Utc>,
    ) -> Result<Option<Note>, NoteError> {
        sqlx::query_as::<_, NoteRow>(
            r#"
            UPDATE notes
            SET title = $3,
                content = $4,
                updated_at = GREATEST($5, updated_at + INTERVAL '1 microsecond')
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .bind(draft.title.as_str())
        .bind(&draft.content)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Note::try_from)
        .transpose()
    }

    async fn delete(&self, owner: UserId, id: NoteId) -> Result<Option<Note>, NoteError> {
        sqlx::query_as::<_, NoteRow>(
            r#"
            DELETE FROM notes
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Note::try_from)
        .transpose()
    }
}
