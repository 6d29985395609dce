use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::song::models::SongFilter;
use crate::domain::song::models::SongSummary;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::QueryParams;
use crate::inbound::http::handlers::SongSummaryData;
use crate::inbound::http::router::AppState;

/// `?title=&performer=` substring filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSongsQuery {
    title: Option<String>,
    performer: Option<String>,
}

pub async fn list_songs(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListSongsQuery>,
) -> Result<ApiSuccess<ListSongsResponseData>, ApiError> {
    state
        .song_service
        .list_songs(SongFilter::new(query.title, query.performer))
        .await
        .map_err(ApiError::from)
        .map(|ref songs| ApiSuccess::new(StatusCode::OK, songs.as_slice().into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSongsResponseData {
    pub songs: Vec<SongSummaryData>,
}

impl From<&[SongSummary]> for ListSongsResponseData {
    fn from(songs: &[SongSummary]) -> Self {
        Self {
            songs: songs.iter().map(SongSummaryData::from).collect(),
        }
    }
}
