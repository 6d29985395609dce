use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::album::models::AlbumId;
use crate::domain::album::models::AlbumWithSongs;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::handlers::SongSummaryData;
use crate::inbound::http::router::AppState;

pub async fn get_album(
    State(state): State<AppState>,
    PathParam(album_id): PathParam<String>,
) -> Result<ApiSuccess<GetAlbumResponseData>, ApiError> {
    state
        .album_service
        .get_album(&AlbumId::from(album_id))
        .await
        .map_err(ApiError::from)
        .map(|ref album| ApiSuccess::new(StatusCode::OK, album.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAlbumResponseData {
    pub album: AlbumData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumData {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub songs: Vec<SongSummaryData>,
}

impl From<&AlbumWithSongs> for GetAlbumResponseData {
    fn from(value: &AlbumWithSongs) -> Self {
        Self {
            album: AlbumData {
                id: value.album.id.to_string(),
                name: value.album.name.clone(),
                year: value.album.year.value(),
                songs: value.songs.iter().map(SongSummaryData::from).collect(),
            },
        }
    }
}
