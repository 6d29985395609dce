use async_trait::async_trait;

use crate::domain::collaboration::errors::CollaborationError;
use crate::domain::collaboration::models::Collaboration;
use crate::domain::collaboration::models::CollaborationCommand;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::user::models::UserId;

/// Port for managing playlist collaborators. Only the playlist owner may call it.
#[async_trait]
pub trait CollaborationServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `Playlist(NotFound)` / `Playlist(AccessDenied)` - Missing playlist or caller is not the owner
    /// * `UserNotFound` - Target user does not exist
    /// * `AlreadyExists` - Pair was added before
    async fn add_collaboration(
        &self,
        command: CollaborationCommand,
        owner: &UserId,
    ) -> Result<Collaboration, CollaborationError>;

    /// # Errors
    /// * `NotFound` - Pair does not exist
    async fn delete_collaboration(
        &self,
        command: CollaborationCommand,
        owner: &UserId,
    ) -> Result<(), CollaborationError>;
}

#[async_trait]
pub trait CollaborationRepository: Send + Sync + 'static {
    async fn create(&self, collaboration: Collaboration)
        -> Result<Collaboration, CollaborationError>;

    async fn exists(&self, playlist_id: &PlaylistId, user_id: &UserId)
        -> Result<bool, CollaborationError>;

    /// # Errors
    /// * `NotFound` - No row was deleted
    async fn delete(&self, playlist_id: &PlaylistId, user_id: &UserId)
        -> Result<(), CollaborationError>;
}
