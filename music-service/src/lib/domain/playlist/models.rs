use std::fmt;

use crate::domain::common::generate_id;
use crate::domain::common::required_text;
use crate::domain::common::FieldError;
use crate::domain::song::models::SongSummary;
use crate::domain::user::models::UserId;

/// Playlist aggregate entity. Only `owner` may delete it or manage collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub owner: UserId,
}

/// Opaque playlist identifier (`playlist-<16 chars>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistId(pub String);

impl PlaylistId {
    pub fn new() -> Self {
        Self(generate_id("playlist"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlaylistId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for PlaylistId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Playlist as listed to a user, with the owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistWithSongs {
    pub playlist: PlaylistSummary,
    pub songs: Vec<SongSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlaylistCommand {
    pub name: String,
}

impl CreatePlaylistCommand {
    const MAX_NAME_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, FieldError> {
        Ok(Self {
            name: required_text("name", name, Self::MAX_NAME_LENGTH)?,
        })
    }
}
