use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::playlist::models::PlaylistId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_playlist(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    PathParam(playlist_id): PathParam<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .playlist_service
        .delete_playlist(&PlaylistId::from(playlist_id), &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Playlist deleted"))
}
