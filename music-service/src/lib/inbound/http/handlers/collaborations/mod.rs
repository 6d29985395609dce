pub mod add_collaboration;
pub mod delete_collaboration;

pub use add_collaboration::add_collaboration;
pub use delete_collaboration::delete_collaboration;

use serde::Deserialize;

use crate::domain::collaboration::errors::CollaborationError;
use crate::domain::collaboration::models::CollaborationCommand;

/// Body of `POST` and `DELETE /collaborations`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationRequest {
    playlist_id: String,
    user_id: String,
}

impl CollaborationRequest {
    fn try_into_command(self) -> Result<CollaborationCommand, CollaborationError> {
        Ok(CollaborationCommand::new(self.playlist_id, self.user_id)?)
    }
}
