use async_trait::async_trait;

use crate::domain::authentication::errors::AuthenticationError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::RefreshToken;
use crate::domain::authentication::models::TokenPair;

/// Port for the token lifecycle.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a fresh access/refresh pair.
    ///
    /// The refresh token is persisted before it is returned.
    ///
    /// # Errors
    /// * `UserNotFound` / `InvalidCredentials` - Rejected credentials
    /// * `TokenIssuance` - Signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthenticationError>;

    /// Exchange a stored refresh token for a new access token.
    ///
    /// # Errors
    /// * `UnknownRefreshToken` - Token is not in the store (never issued or logged out)
    /// * `InvalidRefreshToken` - Signature or expiry check failed
    async fn refresh(&self, token: &RefreshToken) -> Result<String, AuthenticationError>;

    /// Revoke a refresh token.
    ///
    /// # Errors
    /// * `UnknownRefreshToken` - Token is not in the store
    async fn logout(&self, token: &RefreshToken) -> Result<(), AuthenticationError>;
}

/// Persistence for issued refresh tokens.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    async fn save(&self, token: &RefreshToken) -> Result<(), AuthenticationError>;

    async fn exists(&self, token: &RefreshToken) -> Result<bool, AuthenticationError>;

    async fn delete(&self, token: &RefreshToken) -> Result<(), AuthenticationError>;
}
