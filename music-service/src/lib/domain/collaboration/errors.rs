use thiserror::Error;

use crate::domain::common::FieldError;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Error)]
pub enum CollaborationError {
    #[error("Invalid collaboration: {0}")]
    InvalidField(#[from] FieldError),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User is already a collaborator on this playlist")]
    AlreadyExists,

    #[error("Collaboration not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
