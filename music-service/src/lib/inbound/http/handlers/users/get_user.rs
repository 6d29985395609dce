use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<String>,
) -> Result<ApiSuccess<GetUserResponseData>, ApiError> {
    state
        .user_service
        .get_user(&UserId::from(user_id))
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUserResponseData {
    pub user: UserData,
}

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl From<&User> for GetUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            user: UserData {
                id: user.id.to_string(),
                username: user.username.as_str().to_string(),
                fullname: user.fullname.clone(),
            },
        }
    }
}
