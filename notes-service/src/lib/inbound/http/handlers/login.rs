use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::Credentials;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let user = state
        .user_service
        .authenticate(body.try_into_credentials()?)
        .await?;

    let issued = state
        .authenticator
        .issue_token(user.id, user.username.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login successful".to_string(),
            user: UserData::from(&user),
            token: issued.access_token,
        },
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

impl LoginRequest {
    fn try_into_credentials(self) -> Result<Credentials, ApiError> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Credentials { username, password })
            }
            _ => Err(ApiError::BadRequest(
                "Username and password are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub user: UserData,
    pub token: String,
}
