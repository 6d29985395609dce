use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::AlbumRequest;
use crate::domain::album::models::Album;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn create_album(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AlbumRequest>,
) -> Result<ApiSuccess<CreateAlbumResponseData>, ApiError> {
    state
        .album_service
        .create_album(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref album| ApiSuccess::new(StatusCode::CREATED, album.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumResponseData {
    pub album_id: String,
}

impl From<&Album> for CreateAlbumResponseData {
    fn from(album: &Album) -> Self {
        Self {
            album_id: album.id.to_string(),
        }
    }
}
