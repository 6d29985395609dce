use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::common::FieldError;
use crate::user::errors::UserError;

/// Failures of the login / refresh / logout flow.
///
/// `UserNotFound` and `InvalidCredentials` render the same message so a client
/// cannot probe which usernames exist.
#[derive(Debug, Clone, Error)]
pub enum AuthenticationError {
    #[error("Invalid authentication payload: {0}")]
    InvalidField(#[from] FieldError),

    #[error("The credentials you provided are incorrect")]
    UserNotFound(String),

    #[error("The credentials you provided are incorrect")]
    InvalidCredentials,

    #[error("Refresh token is not registered")]
    UnknownRefreshToken,

    #[error("Refresh token is invalid or expired")]
    InvalidRefreshToken(JwtError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(JwtError),

    #[error("Password verification failed: {0}")]
    Password(PasswordError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
