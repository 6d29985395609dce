use thiserror::Error;

use crate::domain::common::FieldError;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::song::models::SongId;

#[derive(Debug, Clone, Error)]
pub enum PlaylistError {
    #[error("Invalid playlist: {0}")]
    InvalidField(#[from] FieldError),

    #[error("Playlist not found: {0}")]
    NotFound(PlaylistId),

    #[error("You are not entitled to access playlist {0}")]
    AccessDenied(PlaylistId),

    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    #[error("Song {0} is already in the playlist")]
    SongAlreadyInPlaylist(SongId),

    #[error("Song {0} is not in the playlist")]
    SongNotInPlaylist(SongId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
