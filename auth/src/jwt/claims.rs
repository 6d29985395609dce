use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by both access and refresh tokens.
///
/// `jti` is random per token, so two tokens minted for the same user in the
/// same second still differ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,
}

impl Claims {
    /// Create claims for `subject` valid for `max_age` from now.
    pub fn new(subject: impl ToString, max_age: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + max_age).timestamp(),
            jti: Uuid::new_v4().simple().to_string(),
        }
    }

    /// Subject the token was issued for.
    pub fn subject(&self) -> &str {
        &self.sub
    }
}
