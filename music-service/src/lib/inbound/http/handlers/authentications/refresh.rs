use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::RefreshTokenRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn refresh(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RefreshTokenRequest>,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    state
        .authentication_service
        .refresh(&body.try_into_token()?)
        .await
        .map_err(ApiError::from)
        .map(|access_token| ApiSuccess::new(StatusCode::OK, RefreshResponseData { access_token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponseData {
    pub access_token: String,
}
