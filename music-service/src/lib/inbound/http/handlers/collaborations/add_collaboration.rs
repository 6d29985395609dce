use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::CollaborationRequest;
use crate::domain::collaboration::models::Collaboration;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_collaboration(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CollaborationRequest>,
) -> Result<ApiSuccess<AddCollaborationResponseData>, ApiError> {
    state
        .collaboration_service
        .add_collaboration(body.try_into_command()?, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref collaboration| ApiSuccess::new(StatusCode::CREATED, collaboration.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCollaborationResponseData {
    pub collaboration_id: String,
}

impl From<&Collaboration> for AddCollaborationResponseData {
    fn from(collaboration: &Collaboration) -> Self {
        Self {
            collaboration_id: collaboration.id.to_string(),
        }
    }
}
