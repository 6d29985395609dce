use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::SongRequest;
use crate::domain::song::models::Song;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn create_song(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SongRequest>,
) -> Result<ApiSuccess<CreateSongResponseData>, ApiError> {
    state
        .song_service
        .create_song(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref song| ApiSuccess::new(StatusCode::CREATED, song.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongResponseData {
    pub song_id: String,
}

impl From<&Song> for CreateSongResponseData {
    fn from(song: &Song) -> Self {
        Self {
            song_id: song.id.to_string(),
        }
    }
}
