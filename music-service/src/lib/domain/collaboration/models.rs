use std::fmt;

use crate::domain::common::generate_id;
use crate::domain::common::required_text;
use crate::domain::common::FieldError;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::user::models::UserId;

/// Grants `user_id` access to the songs of `playlist_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collaboration {
    pub id: CollaborationId,
    pub playlist_id: PlaylistId,
    pub user_id: UserId,
}

/// Opaque collaboration identifier (`collab-<16 chars>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollaborationId(pub String);

impl CollaborationId {
    pub fn new() -> Self {
        Self(generate_id("collab"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CollaborationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for CollaborationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CollaborationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Playlist/user pair named by an add or remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationCommand {
    pub playlist_id: PlaylistId,
    pub user_id: UserId,
}

impl CollaborationCommand {
    pub fn new(playlist_id: String, user_id: String) -> Result<Self, FieldError> {
        Ok(Self {
            playlist_id: PlaylistId::from(required_text("playlistId", playlist_id, usize::MAX)?),
            user_id: UserId::from(required_text("userId", user_id, usize::MAX)?),
        })
    }
}
