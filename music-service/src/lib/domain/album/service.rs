use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumCommand;
use crate::domain::album::models::AlbumId;
use crate::domain::album::models::AlbumWithSongs;
use crate::domain::album::ports::AlbumRepository;
use crate::domain::album::ports::AlbumServicePort;

pub struct AlbumService<AR>
where
    AR: AlbumRepository,
{
    repository: Arc<AR>,
}

impl<AR> AlbumService<AR>
where
    AR: AlbumRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AlbumServicePort for AlbumService<AR>
where
    AR: AlbumRepository,
{
    async fn create_album(&self, command: AlbumCommand) -> Result<Album, AlbumError> {
        let album = Album {
            id: AlbumId::new(),
            name: command.name,
            year: command.year,
        };

        let album = self.repository.create(album).await?;
        tracing::info!(album_id = %album.id, "Album created");

        Ok(album)
    }

    async fn get_album(&self, id: &AlbumId) -> Result<AlbumWithSongs, AlbumError> {
        let album = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AlbumError::NotFound(id.clone()))?;
        let songs = self.repository.find_songs(id).await?;

        Ok(AlbumWithSongs { album, songs })
    }

    async fn update_album(
        &self,
        id: &AlbumId,
        command: AlbumCommand,
    ) -> Result<Album, AlbumError> {
        self.repository
            .update(Album {
                id: id.clone(),
                name: command.name,
                year: command.year,
            })
            .await
    }

    async fn delete_album(&self, id: &AlbumId) -> Result<(), AlbumError> {
        self.repository.delete(id).await?;
        tracing::info!(album_id = %id, "Album deleted");
        Ok(())
    }
}
