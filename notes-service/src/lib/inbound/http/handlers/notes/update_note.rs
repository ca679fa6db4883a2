use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::NoteMutationResponseData;
use super::NoteRequest;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::parse_note_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Replaces title and content. Unknown and foreign ids are both 404, and a
/// bad id is reported before the body is validated.
pub async fn update_note(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NoteRequest>,
) -> Result<ApiSuccess<NoteMutationResponseData>, ApiError> {
    let note_id = parse_note_id(&id)?;
    let draft = body.try_into_draft()?;

    let note = state
        .note_service
        .update_note(caller.user_id, note_id, draft)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        NoteMutationResponseData {
            message: "Note updated successfully".to_string(),
            note: (&note).into(),
        },
    ))
}
