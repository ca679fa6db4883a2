use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Identity of the verified token holder, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Why a request was stopped before reaching a protected handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    #[error("Access token required")]
    MissingCredential,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,
}

impl From<JwtError> for AuthorizationError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AuthorizationError::ExpiredToken,
            JwtError::InvalidToken(_) | JwtError::EncodingFailed(_) => {
                AuthorizationError::InvalidToken
            }
        }
    }
}

impl IntoResponse for AuthorizationError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            AuthorizationError::MissingCredential => ApiError::Unauthorized(message),
            AuthorizationError::InvalidToken | AuthorizationError::ExpiredToken => {
                ApiError::Forbidden(message)
            }
        }
        .into_response()
    }
}

/// Verifies the bearer token and attaches [`AuthenticatedUser`] to the request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthorizationError> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token rejected");
        AuthorizationError::from(e)
    })?;

    // A well-signed token whose subject is not a user id is still unusable.
    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        AuthorizationError::InvalidToken
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, AuthorizationError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthorizationError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthorizationError::InvalidToken)?
        .trim();

    // Trailing whitespace is stripped in transit, so `Bearer ` arrives as `Bearer`.
    if value == "Bearer" {
        return Err(AuthorizationError::MissingCredential);
    }

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthorizationError::InvalidToken)?
        .trim();

    Ok(token)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::http::{self};

    use super::*;

    fn request_with(authorization: Option<&str>) -> Request {
        let mut builder = http::Request::builder().uri("/api/notes");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            extract_token_from_header(&request_with(None)),
            Err(AuthorizationError::MissingCredential)
        );
    }

    #[test]
    fn test_empty_bearer_token_is_missing() {
        for value in ["Bearer", "Bearer ", "Bearer    "] {
            assert_eq!(
                extract_token_from_header(&request_with(Some(value))),
                Err(AuthorizationError::MissingCredential)
            );
        }
    }

    #[test]
    fn test_scheme_prefix_without_separator_is_invalid() {
        assert_eq!(
            extract_token_from_header(&request_with(Some("Bearerabc.def.ghi"))),
            Err(AuthorizationError::InvalidToken)
        );
    }

    #[test]
    fn test_non_bearer_scheme_is_invalid() {
        assert_eq!(
            extract_token_from_header(&request_with(Some("Basic YWxpY2U6c2VjcmV0"))),
            Err(AuthorizationError::InvalidToken)
        );
    }

    #[test]
    fn test_bearer_token_is_extracted() {
        assert_eq!(
            extract_token_from_header(&request_with(Some("Bearer abc.def.ghi"))),
            Ok("abc.def.ghi")
        );
    }

    #[test]
    fn test_jwt_errors_map_to_gate_errors() {
        assert_eq!(
            AuthorizationError::from(JwtError::TokenExpired),
            AuthorizationError::ExpiredToken
        );
        assert_eq!(
            AuthorizationError::from(JwtError::InvalidToken("bad".to_string())),
            AuthorizationError::InvalidToken
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthorizationError::MissingCredential.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthorizationError::InvalidToken.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthorizationError::ExpiredToken.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
