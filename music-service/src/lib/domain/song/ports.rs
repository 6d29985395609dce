use async_trait::async_trait;

use crate::domain::song::errors::SongError;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongCommand;
use crate::domain::song::models::SongFilter;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSummary;

/// Port for song domain service operations.
#[async_trait]
pub trait SongServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `AlbumNotFound` - `album_id` references no album
    async fn create_song(&self, command: SongCommand) -> Result<Song, SongError>;

    async fn list_songs(&self, filter: SongFilter) -> Result<Vec<SongSummary>, SongError>;

    /// # Errors
    /// * `NotFound` - Song does not exist
    async fn get_song(&self, id: &SongId) -> Result<Song, SongError>;

    /// # Errors
    /// * `NotFound` - Song does not exist
    /// * `AlbumNotFound` - `album_id` references no album
    async fn update_song(&self, id: &SongId, command: SongCommand) -> Result<Song, SongError>;

    /// # Errors
    /// * `NotFound` - Song does not exist
    async fn delete_song(&self, id: &SongId) -> Result<(), SongError>;
}

/// Persistence operations for song aggregate.
#[async_trait]
pub trait SongRepository: Send + Sync + 'static {
    async fn create(&self, song: Song) -> Result<Song, SongError>;

    async fn search(&self, filter: &SongFilter) -> Result<Vec<SongSummary>, SongError>;

    async fn find_by_id(&self, id: &SongId) -> Result<Option<Song>, SongError>;

    async fn update(&self, song: Song) -> Result<Song, SongError>;

    async fn delete(&self, id: &SongId) -> Result<(), SongError>;
}
