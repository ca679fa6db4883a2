use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token payload.
///
/// Identifies the account a bearer token was issued for. Every field is
/// required, so a token missing any of them fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username at the time the token was issued
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username carried alongside the identifier
    /// * `validity` - How long the token stays valid
    pub fn for_user(user_id: impl ToString, username: impl Into<String>, validity: Duration) -> Self {
        Self::issued_at(user_id, username, Utc::now(), validity)
    }

    /// Create claims for a user with an explicit issue time.
    pub fn issued_at(
        user_id: impl ToString,
        username: impl Into<String>,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Self {
        let expiration = issued_at + validity;

        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
