use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::PlaylistWithSongs;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::handlers::SongSummaryData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_playlist_songs(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    PathParam(playlist_id): PathParam<String>,
) -> Result<ApiSuccess<GetPlaylistSongsResponseData>, ApiError> {
    state
        .playlist_service
        .get_playlist_songs(&PlaylistId::from(playlist_id), &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::OK, playlist.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPlaylistSongsResponseData {
    pub playlist: PlaylistSongsData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSongsData {
    pub id: String,
    pub name: String,
    pub username: String,
    pub songs: Vec<SongSummaryData>,
}

impl From<&PlaylistWithSongs> for GetPlaylistSongsResponseData {
    fn from(value: &PlaylistWithSongs) -> Self {
        Self {
            playlist: PlaylistSongsData {
                id: value.playlist.id.to_string(),
                name: value.playlist.name.clone(),
                username: value.playlist.username.clone(),
                songs: value.songs.iter().map(SongSummaryData::from).collect(),
            },
        }
    }
}
