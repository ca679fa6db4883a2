use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::SubsecRound;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Password hashing and verification are CPU-bound, so they run on the
/// blocking pool rather than on the request task.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and verification
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
                .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now().trunc_subsecs(6),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User, UserError> {
        let Some(user) = self
            .repository
            .find_by_username(&credentials.username)
            .await?
        else {
            tracing::warn!(username = %credentials.username, "Login failed: unknown username");
            return Err(UserError::InvalidCredentials);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash.clone();
        let password = credentials.password;

        let verification =
            tokio::task::spawn_blocking(move || authenticator.verify_password(&password, &stored_hash))
                .await
                .map_err(|e| {
                    UserError::Unknown(format!("Password verification task failed: {}", e))
                })?;

        if let Err(e) = verification {
            let err = UserError::from(e);
            if matches!(err, UserError::InvalidCredentials) {
                tracing::warn!(user_id = %user.id, "Login failed: password mismatch");
            }
            return Err(err);
        }

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
