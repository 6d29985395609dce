use std::fmt;

use crate::domain::album::models::AlbumId;
use crate::domain::common::generate_id;
use crate::domain::common::required_text;
use crate::domain::common::ReleaseYear;
use crate::domain::song::errors::SongError;

/// Song aggregate entity.
///
/// `album_id` is optional: a song may be catalogued before its album, and it
/// loses the reference when the album is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub year: ReleaseYear,
    pub genre: String,
    pub performer: String,
    /// Length in seconds.
    pub duration: Option<i32>,
    pub album_id: Option<AlbumId>,
}

/// Opaque song identifier (`song-<16 chars>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongId(pub String);

impl SongId {
    pub fn new() -> Self {
        Self(generate_id("song"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SongId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for SongId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Short listing form used by song search, albums and playlists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSummary {
    pub id: SongId,
    pub title: String,
    pub performer: String,
}

impl From<&Song> for SongSummary {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            title: song.title.clone(),
            performer: song.performer.clone(),
        }
    }
}

/// Case-insensitive substring filters, combined with AND. `None` matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl SongFilter {
    pub fn new(title: Option<String>, performer: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            performer: performer.filter(|p| !p.is_empty()),
        }
    }
}

/// Validated song fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongCommand {
    pub title: String,
    pub year: ReleaseYear,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<AlbumId>,
}

impl SongCommand {
    const MAX_TEXT_LENGTH: usize = 255;

    pub fn new(
        title: String,
        year: i32,
        genre: String,
        performer: String,
        duration: Option<i32>,
        album_id: Option<String>,
    ) -> Result<Self, SongError> {
        if let Some(duration) = duration.filter(|d| *d < 0) {
            return Err(SongError::InvalidDuration(duration));
        }

        Ok(Self {
            title: required_text("title", title, Self::MAX_TEXT_LENGTH)?,
            year: ReleaseYear::new(year)?,
            genre: required_text("genre", genre, Self::MAX_TEXT_LENGTH)?,
            performer: required_text("performer", performer, Self::MAX_TEXT_LENGTH)?,
            duration,
            album_id: album_id.filter(|id| !id.is_empty()).map(AlbumId::from),
        })
    }

    pub fn into_song(self, id: SongId) -> Song {
        Song {
            id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            performer: self.performer,
            duration: self.duration,
            album_id: self.album_id,
        }
    }
}
