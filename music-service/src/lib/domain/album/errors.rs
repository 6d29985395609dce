use thiserror::Error;

use crate::domain::album::models::AlbumId;
use crate::domain::common::FieldError;
use crate::domain::common::YearError;

#[derive(Debug, Clone, Error)]
pub enum AlbumError {
    #[error("Invalid album: {0}")]
    InvalidField(#[from] FieldError),

    #[error("Invalid album: {0}")]
    InvalidYear(#[from] YearError),

    #[error("Album not found: {0}")]
    NotFound(AlbumId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
