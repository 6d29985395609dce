use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::song::errors::SongError;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongCommand;
use crate::domain::song::models::SongFilter;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSummary;
use crate::domain::song::ports::SongRepository;
use crate::domain::song::ports::SongServicePort;

pub struct SongService<SR>
where
    SR: SongRepository,
{
    repository: Arc<SR>,
}

impl<SR> SongService<SR>
where
    SR: SongRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> SongServicePort for SongService<SR>
where
    SR: SongRepository,
{
    async fn create_song(&self, command: SongCommand) -> Result<Song, SongError> {
        let song = self.repository.create(command.into_song(SongId::new())).await?;
        tracing::info!(song_id = %song.id, "Song created");
        Ok(song)
    }

    async fn list_songs(&self, filter: SongFilter) -> Result<Vec<SongSummary>, SongError> {
        self.repository.search(&filter).await
    }

    async fn get_song(&self, id: &SongId) -> Result<Song, SongError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SongError::NotFound(id.clone()))
    }

    async fn update_song(&self, id: &SongId, command: SongCommand) -> Result<Song, SongError> {
        self.repository.update(command.into_song(id.clone())).await
    }

    async fn delete_song(&self, id: &SongId) -> Result<(), SongError> {
        self.repository.delete(id).await?;
        tracing::info!(song_id = %id, "Song deleted");
        Ok(())
    }
}
