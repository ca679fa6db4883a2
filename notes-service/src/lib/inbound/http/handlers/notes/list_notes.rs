use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_notes(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<NoteListResponseData>, ApiError> {
    state
        .note_service
        .list_notes(caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|notes| {
            ApiSuccess::new(
                StatusCode::OK,
                NoteListResponseData {
                    notes: notes.iter().map(NoteData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListResponseData {
    pub notes: Vec<NoteData>,
}
