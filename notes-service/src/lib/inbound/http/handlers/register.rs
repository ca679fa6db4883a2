use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::UsernameError;

/// Create an account and sign the caller in.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let user = state
        .user_service
        .create_user(body.try_into_command()?)
        .await?;

    let issued = state
        .authenticator
        .issue_token(user.id, user.username.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData {
            message: "User registered successfully".to_string(),
            user: UserData::from(&user),
            token: issued.access_token,
        },
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum ParseRegisterRequestError {
    #[error("All fields are required")]
    MissingFields,

    #[error("{0}")]
    Username(#[from] UsernameError),

    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Password(#[from] PasswordError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseRegisterRequestError> {
        let (Some(username), Some(email), Some(password)) =
            (self.username, self.email, self.password)
        else {
            return Err(ParseRegisterRequestError::MissingFields);
        };
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ParseRegisterRequestError::MissingFields);
        }

        let username = Username::new(username)?;
        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;
        Ok(CreateUserCommand::new(username, email, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub user: UserData,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = RegisterRequest {
            password: None,
            ..request("alice", "a@x.com", "secret1")
        };
        assert_eq!(
            body.try_into_command().unwrap_err(),
            ParseRegisterRequestError::MissingFields
        );
    }

    #[test]
    fn test_empty_field_counts_as_missing() {
        assert_eq!(
            request("", "a@x.com", "secret1")
                .try_into_command()
                .unwrap_err(),
            ParseRegisterRequestError::MissingFields
        );
    }

    #[test]
    fn test_short_password_is_rejected() {
        let err = request("alice", "a@x.com", "12345")
            .try_into_command()
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_valid_request_builds_command() {
        let command = request("alice", "a@x.com", "secret1")
            .try_into_command()
            .unwrap();
        assert_eq!(command.username.as_str(), "alice");
        assert_eq!(command.email.as_str(), "a@x.com");
        assert_eq!(command.password.expose(), "secret1");
    }
}
