use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenManager;

use crate::domain::authentication::errors::AuthenticationError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::RefreshToken;
use crate::domain::authentication::models::TokenPair;
use crate::domain::authentication::ports::AuthenticationServicePort;
use crate::domain::authentication::ports::RefreshTokenRepository;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct AuthenticationService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    user_repository: Arc<UR>,
    token_repository: Arc<RR>,
    token_manager: Arc<TokenManager>,
    password_hasher: PasswordHasher,
}

impl<UR, RR> AuthenticationService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    pub fn new(
        user_repository: Arc<UR>,
        token_repository: Arc<RR>,
        token_manager: Arc<TokenManager>,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            token_manager,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR, RR> AuthenticationServicePort for AuthenticationService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthenticationError> {
        let username = Username::new(command.username.clone())
            .map_err(|_| AuthenticationError::UserNotFound(command.username.clone()))?;

        let user = self
            .user_repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AuthenticationError::UserNotFound(command.username.clone()))?;

        self.password_hasher
            .verify(&command.password, &user.password_hash)
            .map_err(|e| match e {
                PasswordError::Mismatch => AuthenticationError::InvalidCredentials,
                other => AuthenticationError::Password(other),
            })?;

        let access_token = self
            .token_manager
            .create_access_token(&user.id)
            .map_err(AuthenticationError::TokenIssuance)?;
        let refresh_token = self
            .token_manager
            .create_refresh_token(&user.id)
            .map_err(AuthenticationError::TokenIssuance)?;

        let stored = RefreshToken::new(refresh_token)?;
        self.token_repository.save(&stored).await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(TokenPair {
            access_token,
            refresh_token: stored.as_str().to_string(),
        })
    }

    async fn refresh(&self, token: &RefreshToken) -> Result<String, AuthenticationError> {
        // The store is authoritative: a logged-out token is rejected even when
        // its signature is still valid.
        if !self.token_repository.exists(token).await? {
            return Err(AuthenticationError::UnknownRefreshToken);
        }

        let claims = self
            .token_manager
            .verify_refresh_token(token.as_str())
            .map_err(AuthenticationError::InvalidRefreshToken)?;

        self.token_manager
            .create_access_token(claims.subject())
            .map_err(AuthenticationError::TokenIssuance)
    }

    async fn logout(&self, token: &RefreshToken) -> Result<(), AuthenticationError> {
        if !self.token_repository.exists(token).await? {
            return Err(AuthenticationError::UnknownRefreshToken);
        }

        self.token_repository.delete(token).await
    }
}
