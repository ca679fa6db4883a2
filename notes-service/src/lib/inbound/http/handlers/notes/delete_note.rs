use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::NoteMutationResponseData;
use crate::inbound::http::handlers::parse_note_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_note(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<NoteMutationResponseData>, ApiError> {
    let note_id = parse_note_id(&id)?;

    let note = state
        .note_service
        .delete_note(caller.user_id, note_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        NoteMutationResponseData {
            message: "Note deleted successfully".to_string(),
            note: (&note).into(),
        },
    ))
}
