use async_trait::async_trait;

use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::PlaylistSummary;
use crate::domain::playlist::models::PlaylistWithSongs;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSummary;
use crate::domain::user::models::UserId;

/// Port for playlist operations.
///
/// Every operation acts on behalf of an authenticated user. Song operations
/// are open to the owner and to collaborators; deletion is owner only.
#[async_trait]
pub trait PlaylistServicePort: Send + Sync + 'static {
    async fn create_playlist(
        &self,
        command: CreatePlaylistCommand,
        owner: &UserId,
    ) -> Result<Playlist, PlaylistError>;

    /// Playlists the user owns or collaborates on.
    async fn list_playlists(&self, user: &UserId) -> Result<Vec<PlaylistSummary>, PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `AccessDenied` - User is not the owner
    async fn delete_playlist(&self, id: &PlaylistId, user: &UserId) -> Result<(), PlaylistError>;

    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `AccessDenied` - User is neither owner nor collaborator
    /// * `SongNotFound` - Song does not exist
    /// * `SongAlreadyInPlaylist` - Song was added before
    async fn add_song(
        &self,
        id: &PlaylistId,
        song_id: &SongId,
        user: &UserId,
    ) -> Result<(), PlaylistError>;

    async fn get_playlist_songs(
        &self,
        id: &PlaylistId,
        user: &UserId,
    ) -> Result<PlaylistWithSongs, PlaylistError>;

    /// # Errors
    /// * `SongNotInPlaylist` - Nothing to remove
    async fn remove_song(
        &self,
        id: &PlaylistId,
        song_id: &SongId,
        user: &UserId,
    ) -> Result<(), PlaylistError>;
}

/// Persistence operations for playlists and their song entries.
#[async_trait]
pub trait PlaylistRepository: Send + Sync + 'static {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, PlaylistError>;

    async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError>;

    async fn find_summary(&self, id: &PlaylistId)
        -> Result<Option<PlaylistSummary>, PlaylistError>;

    async fn list_for_user(&self, user: &UserId) -> Result<Vec<PlaylistSummary>, PlaylistError>;

    async fn delete(&self, id: &PlaylistId) -> Result<(), PlaylistError>;

    /// # Errors
    /// * `SongNotFound` - Foreign key on the song was hit
    /// * `SongAlreadyInPlaylist` - Unique pair was hit
    async fn add_song(&self, id: &PlaylistId, song_id: &SongId) -> Result<(), PlaylistError>;

    async fn find_songs(&self, id: &PlaylistId) -> Result<Vec<SongSummary>, PlaylistError>;

    /// # Errors
    /// * `SongNotInPlaylist` - No row was deleted
    async fn remove_song(&self, id: &PlaylistId, song_id: &SongId) -> Result<(), PlaylistError>;
}
