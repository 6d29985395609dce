use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::CollaborationRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_collaboration(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CollaborationRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .collaboration_service
        .delete_collaboration(body.try_into_command()?, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::message(StatusCode::OK, "Collaborator removed"))
}
