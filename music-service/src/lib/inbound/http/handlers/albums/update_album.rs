use axum::extract::State;
use axum::http::StatusCode;

use super::AlbumRequest;
use crate::domain::album::models::AlbumId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::router::AppState;

pub async fn update_album(
    State(state): State<AppState>,
    PathParam(album_id): PathParam<String>,
    JsonBody(body): JsonBody<AlbumRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .album_service
        .update_album(&AlbumId::from(album_id), body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Album updated"))
}
