use crate::domain::common::required_text;
use crate::domain::common::FieldError;

/// Access and refresh tokens issued together on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh token as presented by a client.
///
/// Only non-blank is checked here; signature and revocation are checked by
/// the authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: String) -> Result<Self, FieldError> {
        Ok(Self(required_text("refreshToken", token, usize::MAX)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Login attempt with raw credentials.
///
/// The username is kept as a plain string: a name that could never have been
/// registered is reported like any other unknown user.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Result<Self, FieldError> {
        Ok(Self {
            username: required_text("username", username, usize::MAX)?,
            password: required_text("password", password, usize::MAX)?,
        })
    }
}
