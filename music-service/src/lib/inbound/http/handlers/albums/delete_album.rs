use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::album::models::AlbumId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::router::AppState;

pub async fn delete_album(
    State(state): State<AppState>,
    PathParam(album_id): PathParam<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .album_service
        .delete_album(&AlbumId::from(album_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Album deleted"))
}
