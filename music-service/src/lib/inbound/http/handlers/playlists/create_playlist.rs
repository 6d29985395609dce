use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::models::Playlist;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_playlist(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CreatePlaylistRequest>,
) -> Result<ApiSuccess<CreatePlaylistResponseData>, ApiError> {
    let command = CreatePlaylistCommand::new(body.name).map_err(PlaylistError::from)?;

    state
        .playlist_service
        .create_playlist(command, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::CREATED, playlist.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePlaylistRequest {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistResponseData {
    pub playlist_id: String,
}

impl From<&Playlist> for CreatePlaylistResponseData {
    fn from(playlist: &Playlist) -> Self {
        Self {
            playlist_id: playlist.id.to_string(),
        }
    }
}
