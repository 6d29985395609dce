pub mod login;
pub mod logout;
pub mod refresh;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;

use serde::Deserialize;

use crate::domain::authentication::errors::AuthenticationError;
use crate::domain::authentication::models::RefreshToken;

/// Body of `PUT` and `DELETE /authentications`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

impl RefreshTokenRequest {
    fn try_into_token(self) -> Result<RefreshToken, AuthenticationError> {
        Ok(RefreshToken::new(self.refresh_token)?)
    }
}
