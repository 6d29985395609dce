use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::playlist::models::PlaylistSummary;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_playlists(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ListPlaylistsResponseData>, ApiError> {
    state
        .playlist_service
        .list_playlists(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref playlists| ApiSuccess::new(StatusCode::OK, playlists.as_slice().into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPlaylistsResponseData {
    pub playlists: Vec<PlaylistData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistData {
    pub id: String,
    pub name: String,
    pub username: String,
}

impl From<&PlaylistSummary> for PlaylistData {
    fn from(playlist: &PlaylistSummary) -> Self {
        Self {
            id: playlist.id.to_string(),
            name: playlist.name.clone(),
            username: playlist.username.clone(),
        }
    }
}

impl From<&[PlaylistSummary]> for ListPlaylistsResponseData {
    fn from(playlists: &[PlaylistSummary]) -> Self {
        Self {
            playlists: playlists.iter().map(PlaylistData::from).collect(),
        }
    }
}
