use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Signing secret and lifetime for one kind of token.
#[derive(Debug, Clone, Copy)]
pub struct TokenSettings<'a> {
    pub secret: &'a [u8],
    pub max_age: Duration,
}

/// Issues and verifies access and refresh tokens.
///
/// Each kind has its own key, so a leaked access key cannot mint refresh
/// tokens and vice versa.
pub struct TokenManager {
    access: JwtHandler,
    access_max_age: Duration,
    refresh: JwtHandler,
    refresh_max_age: Duration,
}

impl TokenManager {
    /// Build a manager from the two key configurations.
    ///
    /// # Errors
    /// * `MissingSecret` - Either secret is empty
    pub fn new(access: TokenSettings<'_>, refresh: TokenSettings<'_>) -> Result<Self, JwtError> {
        Ok(Self {
            access: JwtHandler::new(access.secret)?,
            access_max_age: access.max_age,
            refresh: JwtHandler::new(refresh.secret)?,
            refresh_max_age: refresh.max_age,
        })
    }

    pub fn create_access_token(&self, user_id: impl ToString) -> Result<String, JwtError> {
        self.access.encode(&Claims::new(user_id, self.access_max_age))
    }

    pub fn create_refresh_token(&self, user_id: impl ToString) -> Result<String, JwtError> {
        self.refresh.encode(&Claims::new(user_id, self.refresh_max_age))
    }

    /// Verify an access token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Token outlived the access max-age
    /// * `InvalidSignature` - Not signed with the access key
    /// * `Malformed` - Token cannot be parsed
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.access.decode(token)
    }

    /// Verify a refresh token and return its claims.
    ///
    /// Only checks the signature and expiry; whether the token was revoked is
    /// up to the caller's store.
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.refresh.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_KEY: &[u8] = b"access_secret_key_at_least_32_bytes!";
    const REFRESH_KEY: &[u8] = b"refresh_secret_key_at_least_32_bytes";

    fn manager(access_age: i64, refresh_age: i64) -> TokenManager {
        TokenManager::new(
            TokenSettings {
                secret: ACCESS_KEY,
                max_age: Duration::seconds(access_age),
            },
            TokenSettings {
                secret: REFRESH_KEY,
                max_age: Duration::seconds(refresh_age),
            },
        )
        .expect("Failed to build token manager")
    }

    #[test]
    fn test_pair_carries_same_subject() {
        let tokens = manager(1800, 86400);

        let access = tokens.create_access_token("user-abc").unwrap();
        let refresh = tokens.create_refresh_token("user-abc").unwrap();

        let access_claims = tokens.verify_access_token(&access).unwrap();
        let refresh_claims = tokens.verify_refresh_token(&refresh).unwrap();
        assert_eq!(access_claims.subject(), "user-abc");
        assert_eq!(refresh_claims.subject(), access_claims.subject());
    }

    #[test]
    fn test_access_and_refresh_lifetimes_differ() {
        let tokens = manager(1800, 86400);

        let access = tokens.create_access_token("user-abc").unwrap();
        let refresh = tokens.create_refresh_token("user-abc").unwrap();

        let access_claims = tokens.verify_access_token(&access).unwrap();
        let refresh_claims = tokens.verify_refresh_token(&refresh).unwrap();
        assert_eq!(access_claims.exp - access_claims.iat, 1800);
        assert_eq!(refresh_claims.exp - refresh_claims.iat, 86400);
    }

    #[test]
    fn test_keys_are_not_interchangeable() {
        let tokens = manager(1800, 86400);

        let access = tokens.create_access_token("user-abc").unwrap();
        let refresh = tokens.create_refresh_token("user-abc").unwrap();

        assert_eq!(
            tokens.verify_refresh_token(&access),
            Err(JwtError::InvalidSignature)
        );
        assert_eq!(
            tokens.verify_access_token(&refresh),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_access_token_is_rejected() {
        let tokens = manager(-5, 86400);

        let access = tokens.create_access_token("user-abc").unwrap();
        assert_eq!(
            tokens.verify_access_token(&access),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_missing_secret_is_a_configuration_error() {
        let result = TokenManager::new(
            TokenSettings {
                secret: ACCESS_KEY,
                max_age: Duration::seconds(60),
            },
            TokenSettings {
                secret: b"",
                max_age: Duration::seconds(60),
            },
        );

        assert!(matches!(result, Err(JwtError::MissingSecret)));
    }
}
