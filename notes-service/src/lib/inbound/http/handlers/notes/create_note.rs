use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::NoteMutationResponseData;
use super::NoteRequest;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<NoteRequest>,
) -> Result<ApiSuccess<NoteMutationResponseData>, ApiError> {
    let note = state
        .note_service
        .create_note(caller.user_id, body.try_into_draft()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        NoteMutationResponseData {
            message: "Note created successfully".to_string(),
            note: (&note).into(),
        },
    ))
}
