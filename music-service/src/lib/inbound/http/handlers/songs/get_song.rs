use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::song::models::Song;
use crate::domain::song::models::SongId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::router::AppState;

pub async fn get_song(
    State(state): State<AppState>,
    PathParam(song_id): PathParam<String>,
) -> Result<ApiSuccess<GetSongResponseData>, ApiError> {
    state
        .song_service
        .get_song(&SongId::from(song_id))
        .await
        .map_err(ApiError::from)
        .map(|ref song| ApiSuccess::new(StatusCode::OK, song.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetSongResponseData {
    pub song: SongData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongData {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub performer: String,
    pub genre: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

impl From<&Song> for GetSongResponseData {
    fn from(song: &Song) -> Self {
        Self {
            song: SongData {
                id: song.id.to_string(),
                title: song.title.clone(),
                year: song.year.value(),
                performer: song.performer.clone(),
                genre: song.genre.clone(),
                duration: song.duration,
                album_id: song.album_id.as_ref().map(ToString::to_string),
            },
        }
    }
}
