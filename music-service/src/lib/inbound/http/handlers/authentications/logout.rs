use axum::extract::State;
use axum::http::StatusCode;

use super::RefreshTokenRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn logout(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RefreshTokenRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .authentication_service
        .logout(&body.try_into_token()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Refresh token deleted"))
}
