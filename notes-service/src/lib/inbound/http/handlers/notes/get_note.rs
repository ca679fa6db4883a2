use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::inbound::http::handlers::parse_note_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_note(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    let note_id = parse_note_id(&id)?;

    state
        .note_service
        .get_note(caller.user_id, note_id)
        .await
        .map_err(ApiError::from)
        .map(|ref note| {
            ApiSuccess::new(
                StatusCode::OK,
                NoteResponseData { note: note.into() },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteResponseData {
    pub note: NoteData,
}
