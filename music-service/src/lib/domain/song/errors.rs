use thiserror::Error;

use crate::domain::album::models::AlbumId;
use crate::domain::common::FieldError;
use crate::domain::common::YearError;
use crate::domain::song::models::SongId;

#[derive(Debug, Clone, Error)]
pub enum SongError {
    #[error("Invalid song: {0}")]
    InvalidField(#[from] FieldError),

    #[error("Invalid song: {0}")]
    InvalidYear(#[from] YearError),

    #[error("Invalid song: duration must not be negative, got {0}")]
    InvalidDuration(i32),

    #[error("Song not found: {0}")]
    NotFound(SongId),

    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
