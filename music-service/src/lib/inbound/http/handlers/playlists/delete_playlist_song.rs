use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::PlaylistSongRequest;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::PlaylistId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_playlist_song(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    PathParam(playlist_id): PathParam<String>,
    JsonBody(body): JsonBody<PlaylistSongRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    let song_id = body.try_into_song_id().map_err(PlaylistError::from)?;

    state
        .playlist_service
        .remove_song(&PlaylistId::from(playlist_id), &song_id, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Song removed from playlist"))
}
