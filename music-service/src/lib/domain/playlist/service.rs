use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collaboration::ports::CollaborationRepository;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::PlaylistSummary;
use crate::domain::playlist::models::PlaylistWithSongs;
use crate::domain::playlist::ports::PlaylistRepository;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::domain::song::models::SongId;
use crate::domain::user::models::UserId;

/// Load a playlist and check that `user` owns it.
///
/// # Errors
/// * `NotFound` - Playlist does not exist
/// * `AccessDenied` - Playlist belongs to someone else
pub async fn ensure_owner<PR>(
    repository: &PR,
    id: &PlaylistId,
    user: &UserId,
) -> Result<Playlist, PlaylistError>
where
    PR: PlaylistRepository + ?Sized,
{
    let playlist = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| PlaylistError::NotFound(id.clone()))?;

    if playlist.owner != *user {
        return Err(PlaylistError::AccessDenied(id.clone()));
    }

    Ok(playlist)
}

pub struct PlaylistService<PR, CR>
where
    PR: PlaylistRepository,
    CR: CollaborationRepository,
{
    repository: Arc<PR>,
    collaborations: Arc<CR>,
}

impl<PR, CR> PlaylistService<PR, CR>
where
    PR: PlaylistRepository,
    CR: CollaborationRepository,
{
    pub fn new(repository: Arc<PR>, collaborations: Arc<CR>) -> Self {
        Self {
            repository,
            collaborations,
        }
    }

    /// Owner or collaborator.
    async fn ensure_access(&self, id: &PlaylistId, user: &UserId) -> Result<(), PlaylistError> {
        match ensure_owner(self.repository.as_ref(), id, user).await {
            Ok(_) => Ok(()),
            Err(PlaylistError::AccessDenied(_)) => {
                let collaborator = self
                    .collaborations
                    .exists(id, user)
                    .await
                    .map_err(|e| PlaylistError::DatabaseError(e.to_string()))?;

                if collaborator {
                    Ok(())
                } else {
                    Err(PlaylistError::AccessDenied(id.clone()))
                }
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<PR, CR> PlaylistServicePort for PlaylistService<PR, CR>
where
    PR: PlaylistRepository,
    CR: CollaborationRepository,
{
    async fn create_playlist(
        &self,
        command: CreatePlaylistCommand,
        owner: &UserId,
    ) -> Result<Playlist, PlaylistError> {
        let playlist = Playlist {
            id: PlaylistId::new(),
            name: command.name,
            owner: owner.clone(),
        };

        let playlist = self.repository.create(playlist).await?;
        tracing::info!(playlist_id = %playlist.id, owner = %playlist.owner, "Playlist created");

        Ok(playlist)
    }

    async fn list_playlists(&self, user: &UserId) -> Result<Vec<PlaylistSummary>, PlaylistError> {
        self.repository.list_for_user(user).await
    }

    async fn delete_playlist(&self, id: &PlaylistId, user: &UserId) -> Result<(), PlaylistError> {
        ensure_owner(self.repository.as_ref(), id, user).await?;
        self.repository.delete(id).await?;
        tracing::info!(playlist_id = %id, "Playlist deleted");
        Ok(())
    }

    async fn add_song(
        &self,
        id: &PlaylistId,
        song_id: &SongId,
        user: &UserId,
    ) -> Result<(), PlaylistError> {
        self.ensure_access(id, user).await?;
        self.repository.add_song(id, song_id).await
    }

    async fn get_playlist_songs(
        &self,
        id: &PlaylistId,
        user: &UserId,
    ) -> Result<PlaylistWithSongs, PlaylistError> {
        self.ensure_access(id, user).await?;

        let playlist = self
            .repository
            .find_summary(id)
            .await?
            .ok_or_else(|| PlaylistError::NotFound(id.clone()))?;
        let songs = self.repository.find_songs(id).await?;

        Ok(PlaylistWithSongs { playlist, songs })
    }

    async fn remove_song(
        &self,
        id: &PlaylistId,
        song_id: &SongId,
        user: &UserId,
    ) -> Result<(), PlaylistError> {
        self.ensure_access(id, user).await?;
        self.repository.remove_song(id, song_id).await
    }
}
