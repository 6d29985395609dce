use async_trait::async_trait;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumCommand;
use crate::domain::album::models::AlbumId;
use crate::domain::album::models::AlbumWithSongs;
use crate::domain::song::models::SongSummary;

/// Port for album domain service operations.
#[async_trait]
pub trait AlbumServicePort: Send + Sync + 'static {
    async fn create_album(&self, command: AlbumCommand) -> Result<Album, AlbumError>;

    /// Retrieve an album and the songs assigned to it.
    ///
    /// # Errors
    /// * `NotFound` - Album does not exist
    async fn get_album(&self, id: &AlbumId) -> Result<AlbumWithSongs, AlbumError>;

    /// Replace name and year of an existing album.
    ///
    /// # Errors
    /// * `NotFound` - Album does not exist
    async fn update_album(&self, id: &AlbumId, command: AlbumCommand)
        -> Result<Album, AlbumError>;

    /// Delete an album. Songs that referenced it keep existing without one.
    ///
    /// # Errors
    /// * `NotFound` - Album does not exist
    async fn delete_album(&self, id: &AlbumId) -> Result<(), AlbumError>;
}

/// Persistence operations for album aggregate.
#[async_trait]
pub trait AlbumRepository: Send + Sync + 'static {
    async fn create(&self, album: Album) -> Result<Album, AlbumError>;

    async fn find_by_id(&self, id: &AlbumId) -> Result<Option<Album>, AlbumError>;

    async fn find_songs(&self, id: &AlbumId) -> Result<Vec<SongSummary>, AlbumError>;

    /// # Errors
    /// * `NotFound` - No row was updated
    async fn update(&self, album: Album) -> Result<Album, AlbumError>;

    /// # Errors
    /// * `NotFound` - No row was deleted
    async fn delete(&self, id: &AlbumId) -> Result<(), AlbumError>;
}
