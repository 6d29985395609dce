use axum::extract::State;
use axum::http::StatusCode;

use super::SongRequest;
use crate::domain::song::models::SongId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::PathParam;
use crate::inbound::http::router::AppState;

pub async fn update_song(
    State(state): State<AppState>,
    PathParam(song_id): PathParam<String>,
    JsonBody(body): JsonBody<SongRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .song_service
        .update_song(&SongId::from(song_id), body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Song updated"))
}
