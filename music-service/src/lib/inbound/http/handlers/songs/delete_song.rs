use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::song::models::SongId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::router::AppState;

pub async fn delete_song(
    State(state): State<AppState>,
    PathParam(song_id): PathParam<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .song_service
        .delete_song(&SongId::from(song_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Song deleted"))
}
